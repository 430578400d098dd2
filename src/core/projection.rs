use std::f64::consts::PI;

use crate::config::MapConfig;
use crate::core::model::{Coordinates, Point};
use crate::core::placement::ScreenProjection;

const EARTH_RADIUS: f64 = 6378137.0;
const MAX_LATITUDE: f64 = 85.0511287798;
const TILE_SIZE: f64 = 256.0;

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 18.0;

/// Spherical Mercator projection to unscaled world coordinates, in metres.
fn mercator(coordinates: Coordinates) -> Point {
    const D: f64 = PI / 180.0;
    let lat = coordinates.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let sin_lat = (lat * D).sin();
    Point::new(
        EARTH_RADIUS * coordinates.longitude * D,
        EARTH_RADIUS * ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / 2.0,
    )
}

fn mercator_inverse(point: Point) -> Coordinates {
    const D: f64 = 180.0 / PI;
    Coordinates::new(
        (2.0 * (point.y / EARTH_RADIUS).exp().atan() - PI / 2.0) * D,
        point.x * D / EARTH_RADIUS,
    )
}

/// Pannable, zoomable view of the project map.
///
/// The view is not ready until it has been given a non-empty viewport; until
/// then it refuses to project anything.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    center: Coordinates,
    zoom: f64,
    size: Option<(f64, f64)>,
}

impl MapView {
    pub fn new(center: Coordinates, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            size: None,
        }
    }

    pub fn from_config(config: &MapConfig) -> Self {
        let [lat, lon] = config.center;
        let [width, height] = config.viewport;
        let mut view = Self::new(Coordinates::new(lat, lon), config.zoom);
        view.resize(width, height);
        view
    }

    pub fn center(&self) -> Coordinates {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn is_ready(&self) -> bool {
        self.size.is_some()
    }

    /// Sets the viewport size; a zero or negative size makes the view not ready.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = (width > 0.0 && height > 0.0).then_some((width, height));
    }

    pub fn zoom_to(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Moves the map content by `(dx, dy)` pixels, as a drag would.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let centre = self.world_pixel(self.center);
        self.center = self.unproject(Point::new(centre.x - dx, centre.y - dy));
    }

    fn scale(&self) -> f64 {
        TILE_SIZE * 2_f64.powf(self.zoom)
    }

    /// Absolute pixel position at the current zoom, origin at the top-left of the world.
    fn world_pixel(&self, coordinates: Coordinates) -> Point {
        let world = mercator(coordinates);
        let k = 0.5 / (PI * EARTH_RADIUS);
        let scale = self.scale();
        Point::new(scale * (k * world.x + 0.5), scale * (-k * world.y + 0.5))
    }

    fn unproject(&self, pixel: Point) -> Coordinates {
        let k = 0.5 / (PI * EARTH_RADIUS);
        let scale = self.scale();
        mercator_inverse(Point::new(
            (pixel.x / scale - 0.5) / k,
            (pixel.y / scale - 0.5) / -k,
        ))
    }

    pub fn container_point_to_coordinates(&self, point: Point) -> Option<Coordinates> {
        let (width, height) = self.size?;
        let centre = self.world_pixel(self.center);
        Some(self.unproject(Point::new(
            point.x - width / 2.0 + centre.x,
            point.y - height / 2.0 + centre.y,
        )))
    }
}

impl ScreenProjection for MapView {
    fn project_to_screen(&self, coordinates: Coordinates) -> Option<Point> {
        let (width, height) = self.size?;
        let centre = self.world_pixel(self.center);
        let pixel = self.world_pixel(coordinates);
        Some(Point::new(
            pixel.x - centre.x + width / 2.0,
            pixel.y - centre.y + height / 2.0,
        ))
    }

    fn viewport_size(&self) -> Option<(f64, f64)> {
        self.size
    }
}
