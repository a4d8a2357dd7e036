#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Camera state for pan/zoom over the map.
///
/// `offset_x` / `offset_y` are in CSS pixels.
/// `zoom` is a scale factor clamped to `[MIN_ZOOM, MAX_ZOOM]`; the offset is
/// unconstrained (panning is free).
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub offset_x: f64,
    pub offset_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.offset_x) / self.zoom,
            y: (screen.y - self.offset_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.offset_x,
            y: world.y * self.zoom + self.offset_y,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Multiply the zoom by `factor`, clamped to the zoom bounds, keeping
    /// the world point under the screen-space `anchor` fixed.
    ///
    /// Button zoom anchors at the viewport center; wheel zoom anchors at the
    /// cursor.
    pub fn zoom_at(&mut self, factor: f64, anchor: Point) {
        let world = self.screen_to_world(anchor);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.offset_x = anchor.x - world.x * self.zoom;
        self.offset_y = anchor.y - world.y * self.zoom;
    }

    /// Return to the identity view: zoom 1, offset (0, 0).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
