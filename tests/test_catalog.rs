//! Integration tests for the project catalog and its lookups.

mod common;

use siteboard::Error;
use siteboard::core::model::{OrganisationRole, OrganisationStatus, ProjectDetails};

use common::*;

#[test]
fn test_sample_catalog_shape() {
    let catalog = Catalog::sample();
    assert_eq!(catalog.len(), 30);
    assert!(!catalog.is_empty());
    assert_eq!(catalog.organisations().len(), 6);
    assert_eq!(catalog.projects()[0].id, "AMKI");
    assert!(catalog.projects().iter().all(|p| p.progress <= 100));
    assert!(catalog.projects().iter().all(|p| p.location == "Singapore"));
}

#[test]
fn test_sample_ids_are_unique() -> anyhow::Result<()> {
    let sample = Catalog::sample();
    // Re-validating the sample data through the checked constructor
    let checked = Catalog::new(sample.projects().to_vec(), sample.organisations().to_vec())?;
    assert_eq!(checked.len(), sample.len());
    Ok(())
}

#[test]
fn test_lookup_by_id() -> anyhow::Result<()> {
    let catalog = Catalog::sample();
    let project = catalog.project("TL4")?;
    assert_eq!(project.name, "Infra at Tuas Link 4");
    assert_eq!(project.status, Status::Planning);
    assert_eq!(project.details.companies.len(), 2);
    assert!(catalog.contains("PRID1"));
    Ok(())
}

#[test]
fn test_unknown_id_is_not_found() {
    let catalog = Catalog::sample();
    assert!(!catalog.contains("NOPE"));
    match catalog.project("NOPE") {
        Err(Error::ProjectNotFound(id)) => assert_eq!(id, "NOPE"),
        other => panic!("expected ProjectNotFound, got {other:?}"),
    }
    // Lookups are exact, not case-insensitive
    assert!(catalog.project("amki").is_err());
}

#[test]
fn test_extended_details_on_leading_projects() -> anyhow::Result<()> {
    let catalog = Catalog::sample();
    let amki = catalog.project("AMKI")?;
    assert_eq!(amki.details.users, Some(5));
    assert_eq!(amki.details.more_users, Some(7));
    assert_eq!(amki.details.total_docs, Some(142));
    assert_eq!(amki.details.pending_docs, Some(8));
    assert_eq!(amki.details.start_date.as_deref(), Some("Jan 2024"));

    let ldi = catalog.project("LDI")?;
    assert!(ldi.details.users.is_none());
    assert_eq!(ldi.details.end_date.as_deref(), Some("Mar 2025"));

    let plain = catalog.project("AS4D")?;
    assert_eq!(plain.details, ProjectDetails::default());
    Ok(())
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let mut projects = three_projects();
    projects[2].id = "P1".to_string();
    match Catalog::new(projects, Vec::new()) {
        Err(Error::DuplicateId(id)) => assert_eq!(id, "P1"),
        other => panic!("expected DuplicateId, got {other:?}"),
    }
}

#[test]
fn test_progress_over_hundred_is_rejected() {
    let mut projects = three_projects();
    projects[1].progress = 101;
    let err = Catalog::new(projects, Vec::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidProgress { progress: 101, .. }));
}

#[test]
fn test_organisations() {
    let catalog = Catalog::sample();
    let organisations = catalog.organisations();
    assert_eq!(organisations[0].id, "org-mc");
    assert_eq!(organisations[0].role, OrganisationRole::MainContractor);
    let on_hold: Vec<&str> = organisations
        .iter()
        .filter(|o| o.status == OrganisationStatus::OnHold)
        .map(|o| o.id.as_str())
        .collect();
    assert_eq!(on_hold, vec!["org-manufacturer"]);
}
