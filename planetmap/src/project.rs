//! Equirectangular projection between geographic and map-pixel space.
//!
//! Longitude maps linearly left (−180°) to right (+180°); latitude maps
//! linearly top (+90°) to bottom (−90°). `width`/`height` are the background
//! bitmap dimensions, so a projected point is in world space at zoom 1.
//! Latitudes beyond ±90° project off the bitmap, which matches how the game
//! reports them.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use crate::camera::Point;
use crate::coords::GeoCoordinate;

/// Project a geographic coordinate onto the map plane.
#[must_use]
pub fn to_planar(coord: GeoCoordinate, width: f64, height: f64) -> Point {
    Point {
        x: (coord.lon + 180.0) / 360.0 * width,
        y: (90.0 - coord.lat) / 180.0 * height,
    }
}

/// Invert [`to_planar`]: recover the geographic coordinate of a map point.
#[must_use]
pub fn to_geo(point: Point, width: f64, height: f64) -> GeoCoordinate {
    GeoCoordinate {
        lat: 90.0 - point.y / height * 180.0,
        lon: point.x / width * 360.0 - 180.0,
    }
}
