//! Integration tests for the terminal renderings of the dashboard.

mod common;

use siteboard::core::ProjectDetails;
use siteboard::report;

use common::*;

#[test]
fn test_project_details() -> anyhow::Result<()> {
    let catalog = Catalog::sample();
    let text = report::project_details(catalog.project("AMKI")?);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "[Active] AMKI");
    assert_eq!(lines[1], "Ang Mo Kio Infra");
    assert_eq!(lines[2], "Singapore");
    assert!(lines[3].starts_with("Progress: 68% (hsl("));
    assert_eq!(lines[4], "Category: Construction");
    assert_eq!(lines[5], "Timeline: Jan 2024 - Dec 2025 (24 months)");
    assert_eq!(lines[6], "Team: JD SM AL RK PT +7");
    assert_eq!(
        lines[7],
        "Companies: Main Contractor Ltd, Design Consultants, Engineering Partners"
    );
    assert_eq!(lines[8], "Documents: 142 (8 pending)");
    assert_eq!(lines.len(), 9);
    Ok(())
}

#[test]
fn test_details_without_extras() -> anyhow::Result<()> {
    let catalog = Catalog::sample();
    let text = report::project_details(catalog.project("LNS")?);
    assert!(text.contains("Timeline: Feb 2024 - Aug 2025 (19 months)"));
    assert!(!text.contains("Team:"));
    assert!(!text.contains("Documents:"));

    let bare = make_project("X1", "Bare", Status::Planning, Category::Design);
    let text = report::project_details(&bare);
    assert!(!text.contains("Timeline:"));
    assert!(text.contains("Progress: 50% (hsl(182, 75%, 47.5%))"));
    Ok(())
}

#[test]
fn test_project_list_marks_favourites() {
    let mut session = DashboardSession::new(Catalog::sample());
    session.set_status_filter(Selector::Only(Status::Hold));
    session.toggle_favorite("BGS");

    let text = report::project_list(&session);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("* BGS "));
    assert!(lines[0].ends_with("85%  Benoi-Gul Sewer (Construction)"));
    assert!(lines[1].starts_with("  LNS "));
    assert!(lines[1].contains(" CENTEX "));
    assert_eq!(lines[3], "3 of 30 projects shown");
}

#[test]
fn test_project_page_lists_every_organisation() -> anyhow::Result<()> {
    let catalog = Catalog::sample();
    let text = report::project_page(catalog.project("TL4")?, catalog.organisations());
    assert!(text.starts_with(
        "Infra at Tuas Link 4 (TL4)\nOrganisations & Workspaces within this project\n"
    ));
    for organisation in catalog.organisations() {
        assert!(text.contains(&organisation.name));
    }
    assert!(text.contains("SteelCore Industries [On Hold] - Manufacturer"));
    Ok(())
}

#[test]
fn test_not_found() {
    assert_eq!(
        report::not_found("NOPE"),
        "Project Not Found: NOPE\nReturn to Dashboard\n"
    );
}

#[test]
fn test_details_with_partial_extras() {
    let mut project = make_project("X2", "Partial", Status::Active, Category::Centex);
    project.details = ProjectDetails {
        description: Some("Road widening".to_string()),
        users: Some(2),
        total_docs: Some(10),
        ..ProjectDetails::default()
    };

    let text = report::project_details(&project);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[3], "Road widening");
    assert!(lines.contains(&"Team: JD SM"));
    assert!(lines.contains(&"Documents: 10"));
    assert!(text.ends_with("Documents: 10\n"));
}
