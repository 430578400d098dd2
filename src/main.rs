use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use siteboard::core::placement::{ScreenProjection, place_marker_tooltip};
use siteboard::core::{Catalog, CategoryFilter, DashboardSession, MapView, StatusFilter};
use siteboard::{Config, Error, report};

#[derive(Parser)]
#[command(name = "siteboard")]
#[command(about = "Browse the construction project portfolio")]
struct Cli {
    /// Path to a TOML config file (defaults to ./siteboard.toml when present)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects matching the filters, favourites first
    List {
        /// Case-insensitive search over name, id and location
        #[arg(short, long, default_value = "")]
        query: String,

        /// Project status, or "all"
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,

        /// Project category, or "all"
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// Mark a project id as favourite (repeatable)
        #[arg(short, long = "favorite", value_name = "ID")]
        favorites: Vec<String>,
    },
    /// Show the details panel for one project
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Show the organisations working on a project
    Orgs {
        #[arg(value_name = "PROJECT_ID")]
        id: String,
    },
    /// Print where each marker's tooltip is anchored on the map
    Tooltips {
        /// Map viewport width in pixels
        #[arg(long)]
        width: Option<f64>,

        /// Map viewport height in pixels
        #[arg(long)]
        height: Option<f64>,
    },
    /// Launch the desktop dashboard
    #[cfg(feature = "gui")]
    Gui,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}={}", env!("CARGO_CRATE_NAME"), default_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match Config::parse(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to load config: {e}");
            return Err(e.into());
        }
    };
    let catalog = Catalog::sample();
    tracing::debug!(projects = catalog.len(), "catalog loaded");

    match args.command {
        Commands::List {
            query,
            status,
            category,
            favorites,
        } => {
            let mut session = DashboardSession::new(catalog);
            session.set_query(query);
            session.set_status_filter(status);
            session.set_category_filter(category);
            for id in &favorites {
                if !session.catalog().contains(id) {
                    tracing::warn!(id, "ignoring unknown favourite");
                    continue;
                }
                session.add_favorite(id);
            }
            print!("{}", report::project_list(&session));
        }
        Commands::Show { id } => match catalog.project(&id) {
            Ok(project) => print!("{}", report::project_details(project)),
            Err(Error::ProjectNotFound(id)) => {
                print!("{}", report::not_found(&id));
                exit(1);
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Orgs { id } => match catalog.project(&id) {
            Ok(project) => print!("{}", report::project_page(project, catalog.organisations())),
            Err(Error::ProjectNotFound(id)) => {
                print!("{}", report::not_found(&id));
                exit(1);
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Tooltips { width, height } => {
            let mut view = MapView::from_config(&config.map);
            let [default_width, default_height] = config.map.viewport;
            view.resize(width.unwrap_or(default_width), height.unwrap_or(default_height));
            let geometry = config.tooltip_geometry();
            if view.viewport_size().is_none() {
                anyhow::bail!("map viewport must have a positive width and height");
            }
            for project in catalog.projects() {
                let Some(marker) = view.project_to_screen(project.coordinates) else {
                    continue;
                };
                if let Some(placement) =
                    place_marker_tooltip(&view, project.coordinates, &geometry)
                {
                    println!(
                        "{:<8} {} at ({:.0}, {:.0}) -> {:<6} offset ({}, {})",
                        project.id,
                        project.status_color().to_hex_string(),
                        marker.x,
                        marker.y,
                        placement.direction,
                        placement.offset.x,
                        placement.offset.y
                    );
                }
            }
        }
        #[cfg(feature = "gui")]
        Commands::Gui => {
            siteboard::gui::run(config, catalog)?;
        }
    }

    Ok(())
}
