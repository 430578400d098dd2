pub mod catalog;
pub mod color;
pub mod filter;
pub mod model;
pub mod placement;
pub mod projection;
pub mod session;
pub mod timeline;

pub use catalog::Catalog;
pub use color::{Hsl, progress_color};
pub use filter::{CategoryFilter, Favorites, FilterState, Selector, StatusFilter, select};
pub use model::{
    Category, Color, Coordinates, Organisation, OrganisationRole, OrganisationStatus, Point,
    Project, ProjectDetails, Status,
};
pub use placement::{
    Direction, Placement, ScreenProjection, TooltipGeometry, marker_at, place_tooltip,
};
pub use projection::MapView;
pub use session::{DashboardSession, MapEvent};
pub use timeline::{MonthYear, Timeline};
