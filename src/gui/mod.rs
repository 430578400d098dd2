mod app;
mod message;
mod state;
mod screens;
mod widgets;

pub use app::SiteboardApp;
pub use message::Message;
pub use state::AppState;

use crate::config::Config;
use crate::core::Catalog;

pub fn run(config: Config, catalog: Catalog) -> iced::Result {
    tracing::info!(projects = catalog.len(), "starting dashboard");
    iced::application(
        move || SiteboardApp::new(config.clone(), catalog.clone()),
        SiteboardApp::update,
        SiteboardApp::view,
    )
    .title(SiteboardApp::title)
    .theme(SiteboardApp::theme)
    .run()
}
