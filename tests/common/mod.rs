#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from siteboard for tests
pub use siteboard::core::{
    Catalog, Category, CategoryFilter, Coordinates, DashboardSession, Direction, Favorites,
    FilterState, MapEvent, MapView, Placement, Point, Project, ScreenProjection, Selector, Status,
    StatusFilter, TooltipGeometry,
};
