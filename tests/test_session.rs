//! Integration tests for the dashboard session: filters, selection,
//! grid layout and tooltip layout after map events.

mod common;

use siteboard::Error;
use siteboard::config::MapConfig;

use common::*;

fn session() -> DashboardSession {
    DashboardSession::new(Catalog::sample())
}

#[test]
fn test_defaults() {
    let session = session();
    assert_eq!(session.grid_columns(), 3);
    assert!(!session.is_compact());
    assert!(session.is_map_expanded());
    assert!(session.filter().is_empty());
    assert!(session.favorites().is_empty());
    assert!(session.selected_project().is_none());
    assert_eq!(session.summary(), "30 of 30 projects shown");
}

#[test]
fn test_filters_narrow_visible_projects() {
    let mut session = session();
    session.set_status_filter(Selector::Only(Status::Hold));
    assert_eq!(session.summary(), "3 of 30 projects shown");

    session.set_category_filter(Selector::Only(Category::Centex));
    assert_eq!(ids(&session.visible()), vec!["LNS"]);

    session.set_status_filter(Selector::All);
    session.set_category_filter(Selector::All);
    session.set_query("bulim");
    assert_eq!(session.visible().len(), 4);

    session.set_query("");
    assert!(session.filter().is_empty());
}

#[test]
fn test_toggle_favorite_reorders_grid() {
    let mut session = session();
    assert!(session.toggle_favorite("PRID1"));
    assert!(session.is_favorite("PRID1"));
    assert_eq!(session.visible()[0].id, "PRID1");

    assert!(!session.toggle_favorite("PRID1"));
    assert_eq!(session.visible()[0].id, "AMKI");
}

#[test]
fn test_select_project() -> anyhow::Result<()> {
    let mut session = session();
    let project = session.select_project("LNS")?;
    assert_eq!(project.name, "Loyang North Substation");
    assert_eq!(session.selected_project().map(|p| p.id.as_str()), Some("LNS"));

    // A failed selection keeps the previous one
    let err = session.select_project("NOPE").unwrap_err();
    assert!(matches!(err, Error::ProjectNotFound(_)));
    assert_eq!(session.selected_project().map(|p| p.id.as_str()), Some("LNS"));

    session.clear_selection();
    assert!(session.selected_project().is_none());
    Ok(())
}

#[test]
fn test_grid_columns() -> anyhow::Result<()> {
    let mut session = session();
    assert!(matches!(
        session.set_grid_columns(4),
        Err(Error::InvalidGridColumns(4))
    ));
    assert_eq!(session.grid_columns(), 3);

    session.set_grid_columns(5)?;
    assert!(session.is_compact());
    session.set_grid_columns(7)?;
    assert!(session.is_compact());
    session.set_grid_columns(3)?;
    assert!(!session.is_compact());
    Ok(())
}

#[test]
fn test_toggle_map() {
    let mut session = session();
    assert!(!session.toggle_map());
    assert!(session.toggle_map());
}

#[test]
fn test_map_event_before_ready_is_ignored() {
    let mut session = session();
    let view = MapView::new(Coordinates::new(1.3521, 103.8198), 11.0);
    assert!(!session.handle_map_event(MapEvent::Ready, &view));
    assert_eq!(session.tooltip_placement("AMKI"), Placement::default());
}

#[test]
fn test_map_event_lays_out_every_marker() {
    let mut session = session();
    session.set_status_filter(Selector::Only(Status::Hold));

    let right_edge = FixedProjection {
        point: Point::new(795.0, 300.0),
        size: Some(VIEWPORT),
    };
    assert!(session.handle_map_event(MapEvent::PanEnd, &right_edge));
    // Hidden projects are laid out too, so clearing filters needs no new event
    for project in session.catalog().projects() {
        assert_eq!(
            session.tooltip_placement(&project.id).direction,
            Direction::Left
        );
    }

    let top_edge = FixedProjection {
        point: Point::new(400.0, 5.0),
        size: Some(VIEWPORT),
    };
    assert!(session.handle_map_event(MapEvent::ZoomEnd, &top_edge));
    assert_eq!(
        session.tooltip_placement("BGS").direction,
        Direction::Bottom
    );
}

#[test]
fn test_unready_event_keeps_previous_layout() {
    let mut session = session();
    let left_edge = FixedProjection {
        point: Point::new(5.0, 300.0),
        size: Some(VIEWPORT),
    };
    assert!(session.handle_map_event(MapEvent::Ready, &left_edge));

    let gone = FixedProjection {
        point: Point::new(400.0, 300.0),
        size: None,
    };
    assert!(!session.handle_map_event(MapEvent::PanEnd, &gone));
    assert_eq!(session.tooltip_placement("AMKI").direction, Direction::Right);
}

#[test]
fn test_real_map_view_layout() {
    let mut session = session().with_tooltip_geometry(TooltipGeometry {
        width: 120.0,
        height: 40.0,
        margin: 10.0,
    });
    let view = MapView::from_config(&MapConfig::default());
    assert!(session.handle_map_event(MapEvent::Ready, &view));
    for project in session.catalog().projects() {
        let placement = session.tooltip_placement(&project.id);
        assert_eq!(placement.offset, placement.direction.offset());
    }
}

#[test]
fn test_repeated_add_favorite_keeps_project_pinned() {
    let mut session = session();
    assert!(session.add_favorite("TL4"));
    assert!(!session.add_favorite("TL4"));
    assert!(session.is_favorite("TL4"));
    assert_eq!(session.visible()[0].id, "TL4");

    let list = siteboard::report::project_list(&session);
    assert!(list.starts_with("* TL4 "));
}
