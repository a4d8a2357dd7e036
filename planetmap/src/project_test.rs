#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Boundary values ---

#[test]
fn north_west_corner_maps_to_origin() {
    let p = to_planar(GeoCoordinate::new(90.0, -180.0), 1600.0, 800.0);
    assert!(approx_eq(p.x, 0.0));
    assert!(approx_eq(p.y, 0.0));
}

#[test]
fn south_east_corner_maps_to_extent() {
    let p = to_planar(GeoCoordinate::new(-90.0, 180.0), 1600.0, 800.0);
    assert!(approx_eq(p.x, 1600.0));
    assert!(approx_eq(p.y, 800.0));
}

#[test]
fn center_maps_to_center() {
    let p = to_planar(GeoCoordinate::new(0.0, 0.0), 1600.0, 800.0);
    assert!(approx_eq(p.x, 800.0));
    assert!(approx_eq(p.y, 400.0));
}

#[test]
fn longitude_is_linear_in_x() {
    let p = to_planar(GeoCoordinate::new(0.0, -90.0), 1600.0, 800.0);
    assert!(approx_eq(p.x, 400.0));
}

#[test]
fn latitude_beyond_ninety_projects_off_bitmap() {
    let p = to_planar(GeoCoordinate::new(120.0, 0.0), 1600.0, 800.0);
    assert!(p.y < 0.0);
}

// --- Inverse ---

#[test]
fn origin_inverts_to_north_west() {
    let g = to_geo(Point::new(0.0, 0.0), 1600.0, 800.0);
    assert!(approx_eq(g.lat, 90.0));
    assert!(approx_eq(g.lon, -180.0));
}

#[test]
fn center_inverts_to_zero_zero() {
    let g = to_geo(Point::new(800.0, 400.0), 1600.0, 800.0);
    assert!(approx_eq(g.lat, 0.0));
    assert!(approx_eq(g.lon, 0.0));
}

// --- Round trips ---

#[test]
fn round_trip_over_sample_grid() {
    let samples = [-180.0, -123.45, -90.0, -0.5, 0.0, 30.0, 90.0, 179.5, 180.0];
    let dims = [(1600.0, 800.0), (800.0, 400.0), (333.0, 777.0)];
    for &(w, h) in &dims {
        for &lat in &samples {
            for &lon in &samples {
                let back = to_geo(to_planar(GeoCoordinate::new(lat, lon), w, h), w, h);
                assert!(approx_eq(back.lat, lat), "lat {lat} via {w}x{h} -> {}", back.lat);
                assert!(approx_eq(back.lon, lon), "lon {lon} via {w}x{h} -> {}", back.lon);
            }
        }
    }
}

#[test]
fn round_trip_planar_first() {
    let p = Point::new(123.25, 456.75);
    let back = to_planar(to_geo(p, 1600.0, 800.0), 1600.0, 800.0);
    assert!(approx_eq(back.x, p.x));
    assert!(approx_eq(back.y, p.y));
}
