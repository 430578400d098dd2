//! Plain-text rendering of dashboard views for the terminal.

use crate::core::color::progress_color;
use crate::core::model::{Organisation, Project};
use crate::core::session::DashboardSession;
use crate::core::timeline::Timeline;

pub const NOT_FOUND_TITLE: &str = "Project Not Found";
pub const BACK_LINK: &str = "Return to Dashboard";

const AVATAR_INITIALS: [&str; 5] = ["JD", "SM", "AL", "RK", "PT"];

/// One line per visible project, then the "N of M" summary.
pub fn project_list(session: &DashboardSession) -> String {
    let mut out = String::new();
    for project in session.visible() {
        let star = if session.is_favorite(&project.id) { '*' } else { ' ' };
        out.push_str(&format!(
            "{star} {:<8} {:<10} {:<13} {:>3}%  {}\n",
            project.id, project.status, project.category, project.progress, project.name
        ));
    }
    out.push_str(&session.summary());
    out.push('\n');
    out
}

pub fn project_details(project: &Project) -> String {
    let details = &project.details;
    let mut lines = vec![
        format!("[{}] {}", project.status, project.id),
        project.name.clone(),
        project.location.clone(),
    ];
    lines.extend(details.description.clone());
    lines.push(format!(
        "Progress: {}% ({})",
        project.progress,
        progress_color(project.progress)
    ));
    lines.push(format!("Category: {}", project.category));

    match Timeline::from_details(details) {
        Some(Ok(timeline)) => {
            lines.push(format!("Timeline: {timeline} ({} months)", timeline.months()));
        }
        Some(Err(e)) => {
            tracing::warn!(id = %project.id, "unreadable timeline: {e}");
        }
        None => {}
    }

    if let Some(users) = details.users {
        let shown = AVATAR_INITIALS[..(users as usize).min(AVATAR_INITIALS.len())].join(" ");
        lines.push(match details.more_users {
            Some(more) => format!("Team: {shown} +{more}"),
            None => format!("Team: {shown}"),
        });
    }
    if !details.companies.is_empty() {
        lines.push(format!("Companies: {}", details.companies.join(", ")));
    }
    if let Some(total) = details.total_docs {
        lines.push(match details.pending_docs {
            Some(pending) => format!("Documents: {total} ({pending} pending)"),
            None => format!("Documents: {total}"),
        });
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn organisation_card(organisation: &Organisation) -> String {
    format!(
        "{} [{}] - {}\n  documents: {}  team members: {}  pending tasks: {}\n",
        organisation.name,
        organisation.status,
        organisation.role,
        organisation.documents_count,
        organisation.team_members,
        organisation.pending_tasks
    )
}

/// The project page: header and every organisation card.
pub fn project_page(project: &Project, organisations: &[Organisation]) -> String {
    let mut out = format!(
        "{} ({})\nOrganisations & Workspaces within this project\n\n",
        project.name, project.id
    );
    for organisation in organisations {
        out.push_str(&organisation_card(organisation));
    }
    out
}

pub fn not_found(id: &str) -> String {
    format!("{NOT_FOUND_TITLE}: {id}\n{BACK_LINK}\n")
}
