//! Tooltip anchoring for map markers.
//!
//! A marker near a viewport edge gets its tooltip flipped towards the middle
//! of the map so it is never clipped.

use std::fmt;

use crate::core::model::{Coordinates, Point};

/// Distance the tooltip is pushed away from its marker.
pub const TOOLTIP_OFFSET: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    pub fn offset(self) -> Point {
        match self {
            Direction::Top => Point::new(0.0, -TOOLTIP_OFFSET),
            Direction::Bottom => Point::new(0.0, TOOLTIP_OFFSET),
            Direction::Left => Point::new(-TOOLTIP_OFFSET, 0.0),
            Direction::Right => Point::new(TOOLTIP_OFFSET, 0.0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Direction::Top => "top",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub direction: Direction,
    pub offset: Point,
}

impl From<Direction> for Placement {
    fn from(direction: Direction) -> Self {
        Placement {
            direction,
            offset: direction.offset(),
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Direction::Top.into()
    }
}

/// Tooltip footprint and the extra clearance kept from viewport edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for TooltipGeometry {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 60.0,
            margin: 30.0,
        }
    }
}

/// Projection from map coordinates to viewport pixels.
///
/// Both methods return `None` until the underlying map view is ready.
pub trait ScreenProjection {
    fn project_to_screen(&self, coordinates: Coordinates) -> Option<Point>;
    fn viewport_size(&self) -> Option<(f64, f64)>;
}

/// Picks the tooltip direction for a marker at `marker` inside a `width` x `height` viewport.
///
/// Horizontal edges are checked before vertical ones, so a marker in the
/// top-right corner gets a left-facing tooltip.
pub fn place_tooltip(marker: Point, width: f64, height: f64, tooltip: &TooltipGeometry) -> Placement {
    let near_top = marker.y < tooltip.height + tooltip.margin;
    let near_bottom = marker.y > height - tooltip.height - tooltip.margin;
    let near_left = marker.x < tooltip.width + tooltip.margin;
    let near_right = marker.x > width - tooltip.width - tooltip.margin;

    let direction = if near_right && !near_left {
        Direction::Left
    } else if near_left && !near_right {
        Direction::Right
    } else if near_top && !near_bottom {
        Direction::Bottom
    } else {
        // near_bottom alone and the fallback both anchor above the marker
        Direction::Top
    };
    direction.into()
}

/// Projects `coordinates` and places its tooltip, or `None` while the view is not ready.
pub fn place_marker_tooltip<P: ScreenProjection + ?Sized>(
    projection: &P,
    coordinates: Coordinates,
    tooltip: &TooltipGeometry,
) -> Option<Placement> {
    let (width, height) = projection.viewport_size()?;
    let marker = projection.project_to_screen(coordinates)?;
    Some(place_tooltip(marker, width, height, tooltip))
}

/// Index of the marker under `cursor`, if any.
///
/// Overlapping markers resolve to the one drawn last, which sits on top.
pub fn marker_at(markers: &[Point], cursor: Point, radius: f64) -> Option<usize> {
    markers.iter().rposition(|marker| {
        let dx = marker.x - cursor.x;
        let dy = marker.y - cursor.y;
        dx * dx + dy * dy <= radius * radius
    })
}
