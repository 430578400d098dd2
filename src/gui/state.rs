use crate::config::Config;
use crate::core::{Catalog, Coordinates, DashboardSession, MapView};

#[derive(Debug)]
pub struct AppState {
    pub session: DashboardSession,
    pub map: MapView,
    pub config: Config,
}

impl AppState {
    /// The map starts without a viewport; it becomes ready on the first `MapReady`.
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let [lat, lon] = config.map.center;
        let mut session =
            DashboardSession::new(catalog).with_tooltip_geometry(config.tooltip_geometry());
        if let Err(e) = session.set_grid_columns(config.grid.columns) {
            tracing::warn!("{e}, keeping {} columns", session.grid_columns());
        }
        Self {
            session,
            map: MapView::new(Coordinates::new(lat, lon), config.map.zoom),
            config,
        }
    }
}
