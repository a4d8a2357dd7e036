#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_point(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Conversions ---

#[test]
fn identity_camera_is_a_noop() {
    let camera = Camera::default();
    let p = Point::new(123.0, 456.0);
    assert!(approx_point(camera.screen_to_world(p), p));
    assert!(approx_point(camera.world_to_screen(p), p));
}

#[test]
fn screen_to_world_undoes_offset_and_zoom() {
    let camera = Camera { offset_x: 100.0, offset_y: 50.0, zoom: 2.0 };
    let world = camera.screen_to_world(Point::new(300.0, 250.0));
    assert!(approx_point(world, Point::new(100.0, 100.0)));
}

#[test]
fn world_to_screen_applies_zoom_then_offset() {
    let camera = Camera { offset_x: 100.0, offset_y: 50.0, zoom: 2.0 };
    let screen = camera.world_to_screen(Point::new(100.0, 100.0));
    assert!(approx_point(screen, Point::new(300.0, 250.0)));
}

#[test]
fn conversions_round_trip() {
    let camera = Camera { offset_x: -73.5, offset_y: 12.25, zoom: 3.7 };
    let p = Point::new(640.0, 360.0);
    assert!(approx_point(camera.world_to_screen(camera.screen_to_world(p)), p));
    assert!(approx_point(camera.screen_to_world(camera.world_to_screen(p)), p));
}

#[test]
fn screen_dist_shrinks_with_zoom() {
    let camera = Camera { offset_x: 0.0, offset_y: 0.0, zoom: 4.0 };
    assert!(approx_eq(camera.screen_dist_to_world(8.0), 2.0));
}

// --- Zoom ---

#[test]
fn zoom_at_keeps_anchor_fixed() {
    let mut camera = Camera { offset_x: 40.0, offset_y: -25.0, zoom: 2.0 };
    let anchor = Point::new(500.0, 300.0);
    let world_before = camera.screen_to_world(anchor);
    camera.zoom_at(1.5, anchor);
    assert!(approx_eq(camera.zoom, 3.0));
    assert!(approx_point(camera.screen_to_world(anchor), world_before));
}

#[test]
fn zoom_at_center_of_identity_view() {
    let mut camera = Camera::default();
    camera.zoom_at(1.5, Point::new(800.0, 400.0));
    assert!(approx_eq(camera.zoom, 1.5));
    assert!(approx_eq(camera.offset_x, -400.0));
    assert!(approx_eq(camera.offset_y, -200.0));
}

#[test]
fn zoom_clamps_at_upper_bound() {
    let mut camera = Camera::default();
    for _ in 0..50 {
        camera.zoom_at(1.5, Point::new(0.0, 0.0));
    }
    assert_eq!(camera.zoom, MAX_ZOOM);
}

#[test]
fn zoom_clamps_at_lower_bound() {
    let mut camera = Camera::default();
    for _ in 0..50 {
        camera.zoom_at(1.0 / 1.5, Point::new(0.0, 0.0));
    }
    assert_eq!(camera.zoom, MIN_ZOOM);
}

#[test]
fn zoom_at_clamped_still_keeps_anchor_fixed() {
    let mut camera = Camera { offset_x: 10.0, offset_y: 20.0, zoom: 40.0 };
    let anchor = Point::new(200.0, 100.0);
    let world_before = camera.screen_to_world(anchor);
    camera.zoom_at(10.0, anchor);
    assert_eq!(camera.zoom, MAX_ZOOM);
    assert!(approx_point(camera.screen_to_world(anchor), world_before));
}

// --- Constant marker size ---

#[test]
fn marker_radius_is_zoom_invariant_on_screen() {
    // A marker drawn with radius screen_dist_to_world(r) covers r screen
    // pixels at any zoom.
    for zoom in [MIN_ZOOM, 1.0, 10.0, MAX_ZOOM] {
        let camera = Camera { offset_x: 0.0, offset_y: 0.0, zoom };
        let world_radius = camera.screen_dist_to_world(8.0);
        assert!(approx_eq(world_radius * zoom, 8.0));
    }
}

// --- Reset ---

#[test]
fn reset_restores_identity() {
    let mut camera = Camera { offset_x: 99.0, offset_y: -42.0, zoom: 7.0 };
    camera.reset();
    assert!(approx_eq(camera.zoom, 1.0));
    assert!(approx_eq(camera.offset_x, 0.0));
    assert!(approx_eq(camera.offset_y, 0.0));
}
