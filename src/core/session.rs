use std::collections::HashMap;

use crate::core::catalog::Catalog;
use crate::core::filter::{CategoryFilter, Favorites, FilterState, StatusFilter, select_with};
use crate::core::model::Project;
use crate::core::placement::{Placement, ScreenProjection, TooltipGeometry, place_marker_tooltip};
use crate::error::{Error, Result};

pub const GRID_COLUMN_CHOICES: [u8; 3] = [3, 5, 7];

/// Map notifications after which marker screen positions may have moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent {
    Ready,
    PanEnd,
    ZoomEnd,
}

/// UI state for one viewing session of the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    catalog: Catalog,
    filter: FilterState,
    favorites: Favorites,
    selected: Option<String>,
    grid_columns: u8,
    map_expanded: bool,
    tooltip: TooltipGeometry,
    tooltips: HashMap<String, Placement>,
}

impl DashboardSession {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
            favorites: Favorites::new(),
            selected: None,
            grid_columns: GRID_COLUMN_CHOICES[0],
            map_expanded: true,
            tooltip: TooltipGeometry::default(),
            tooltips: HashMap::new(),
        }
    }

    pub fn with_tooltip_geometry(mut self, tooltip: TooltipGeometry) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn grid_columns(&self) -> u8 {
        self.grid_columns
    }

    pub fn is_map_expanded(&self) -> bool {
        self.map_expanded
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        tracing::debug!(%status, "status filter changed");
        self.filter.status = status;
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        tracing::debug!(%category, "category filter changed");
        self.filter.category = category;
    }

    /// Returns whether `id` is a favourite after the toggle.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let now = self.favorites.toggle(id);
        tracing::debug!(id, favorite = now, "favourite toggled");
        now
    }

    /// Pins `id` without toggling; repeated calls keep it a favourite.
    pub fn add_favorite(&mut self, id: &str) -> bool {
        let added = self.favorites.insert(id);
        if added {
            tracing::debug!(id, "favourite added");
        }
        added
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn select_project(&mut self, id: &str) -> Result<&Project> {
        let project = self.catalog.project(id)?;
        self.selected = Some(project.id.clone());
        Ok(project)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected
            .as_deref()
            .and_then(|id| self.catalog.project(id).ok())
    }

    pub fn set_grid_columns(&mut self, columns: u8) -> Result<()> {
        if !GRID_COLUMN_CHOICES.contains(&columns) {
            return Err(Error::InvalidGridColumns(columns));
        }
        self.grid_columns = columns;
        Ok(())
    }

    /// Cards at five or more columns drop secondary details.
    pub fn is_compact(&self) -> bool {
        self.grid_columns >= 5
    }

    pub fn toggle_map(&mut self) -> bool {
        self.map_expanded = !self.map_expanded;
        self.map_expanded
    }

    /// Projects passing the current filters, favourites first.
    pub fn visible(&self) -> Vec<&Project> {
        select_with(self.catalog.projects(), &self.filter, &self.favorites)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} of {} projects shown",
            self.visible().len(),
            self.catalog.len()
        )
    }

    /// Recomputes tooltip placement for every marker on the map.
    ///
    /// Returns `false` and keeps the previous layout when the projection is not
    /// ready yet.
    pub fn handle_map_event<P: ScreenProjection + ?Sized>(
        &mut self,
        event: MapEvent,
        projection: &P,
    ) -> bool {
        if projection.viewport_size().is_none() {
            tracing::debug!(?event, "map view not ready, skipping tooltip layout");
            return false;
        }
        let mut layout = HashMap::new();
        for project in self.catalog.projects() {
            match place_marker_tooltip(projection, project.coordinates, &self.tooltip) {
                Some(placement) => {
                    layout.insert(project.id.clone(), placement);
                }
                None => {
                    tracing::debug!(?event, "projection became unavailable mid-layout");
                    return false;
                }
            }
        }
        tracing::debug!(?event, markers = layout.len(), "tooltip layout updated");
        self.tooltips = layout;
        true
    }

    /// Last computed placement for a marker, defaulting to above it.
    pub fn tooltip_placement(&self, id: &str) -> Placement {
        self.tooltips.get(id).copied().unwrap_or_default()
    }
}
