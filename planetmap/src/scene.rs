//! Scene building: turns current map state into an immutable draw plan.
//!
//! Every redraw produces a fresh `Vec<DrawOp>` from the records, the camera,
//! and the icon cache; the renderer then executes the ops against the 2d
//! context. Keeping the plan as plain data means all placement math — grid
//! culling, marker projection, icon fallback — is testable without a canvas.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::assets::IconCache;
use crate::camera::Point;
use crate::consts::{GRID_FINE_SPACING_DEG, GRID_LABEL_PAD_PX, GRID_TIERS};
use crate::coords::GeoCoordinate;
use crate::engine::MapCore;
use crate::icons::{self, IconRef};
use crate::project;

/// A marker icon after cache resolution: either a glyph to render directly,
/// or the path of an image that is known to be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerIcon {
    Glyph(&'static str),
    Image(String),
}

/// One drawing instruction. World-space coordinates are background-bitmap
/// pixels; screen-space coordinates are CSS pixels unaffected by the camera.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Blit the cached terrain bitmap (or a flat fill while absent).
    Background,
    /// A grid line in world space; scales with zoom.
    GridLine { from: Point, to: Point },
    /// A grid edge label in screen space; legible at any zoom.
    GridLabel { text: String, at: Point },
    /// A base or POI marker at a world position, drawn at constant screen
    /// size.
    Marker {
        world: Point,
        icon: MarkerIcon,
        label: String,
        accent: &'static str,
    },
    /// Floating cursor-coordinate readout in screen space.
    CursorReadout { text: String },
}

/// A full frame: ordered draw ops plus icon paths that should start loading.
#[derive(Debug, Default)]
pub struct ScenePlan {
    pub ops: Vec<DrawOp>,
    /// Image icon paths referenced by a marker this frame but not yet known
    /// to the cache. Each path appears at most once.
    pub icon_requests: Vec<String>,
}

/// Grid spacing in degrees for a zoom level: coarse when zoomed out, finer
/// as tier bounds are crossed.
#[must_use]
pub fn grid_spacing_deg(zoom: f64) -> f64 {
    for (bound, spacing) in GRID_TIERS {
        if zoom < bound {
            return spacing;
        }
    }
    GRID_FINE_SPACING_DEG
}

/// Build the draw plan for the current state.
#[must_use]
pub fn build_scene<T>(core: &MapCore, icons: &IconCache<T>) -> ScenePlan {
    let mut plan = ScenePlan::default();
    plan.ops.push(DrawOp::Background);

    push_grid(core, &mut plan.ops);

    for base in &core.bases {
        let Some(coord) = base.coordinate() else {
            continue;
        };
        plan.ops.push(DrawOp::Marker {
            world: project::to_planar(coord, core.viewport_w, core.viewport_h),
            icon: resolve_icon(icons::BASE_ICON, icons, &mut plan.icon_requests),
            label: base.name.clone(),
            accent: icons::BASE_ACCENT,
        });
    }

    for poi in &core.pois {
        let Some(coord) = poi.coordinate() else {
            continue;
        };
        let icon = icons::poi_icon(poi.kind.as_deref());
        plan.ops.push(DrawOp::Marker {
            world: project::to_planar(coord, core.viewport_w, core.viewport_h),
            icon: resolve_icon(icon, icons, &mut plan.icon_requests),
            label: poi.name.clone(),
            accent: icons::POI_ACCENT,
        });
    }

    if let Some(geo) = core.cursor_geo {
        plan.ops.push(DrawOp::CursorReadout { text: geo.to_string() });
    }

    plan
}

/// Grid lines for the visible slice of the world, with edge labels at the
/// screen-space projection of each line.
fn push_grid(core: &MapCore, ops: &mut Vec<DrawOp>) {
    let (w, h) = (core.viewport_w, core.viewport_h);
    let spacing = grid_spacing_deg(core.camera.zoom);

    // Visible world rectangle in geographic terms, clamped to the map.
    let top_left = project::to_geo(core.camera.screen_to_world(Point::new(0.0, 0.0)), w, h);
    let bottom_right = project::to_geo(core.camera.screen_to_world(Point::new(w, h)), w, h);
    let lon_min = top_left.lon.max(-180.0);
    let lon_max = bottom_right.lon.min(180.0);
    let lat_min = bottom_right.lat.max(-90.0);
    let lat_max = top_left.lat.min(90.0);

    // Meridians: vertical lines at longitude multiples of the spacing.
    for lon in steps(lon_min, lon_max, spacing) {
        let from = project::to_planar(GeoCoordinate::new(90.0, lon), w, h);
        let to = project::to_planar(GeoCoordinate::new(-90.0, lon), w, h);
        let screen_x = core.camera.world_to_screen(from).x;
        ops.push(DrawOp::GridLine { from, to });
        ops.push(DrawOp::GridLabel {
            text: format!("{lon:.0}°"),
            at: Point::new(screen_x, GRID_LABEL_PAD_PX),
        });
    }

    // Parallels: horizontal lines at latitude multiples of the spacing.
    for lat in steps(lat_min, lat_max, spacing) {
        let from = project::to_planar(GeoCoordinate::new(lat, -180.0), w, h);
        let to = project::to_planar(GeoCoordinate::new(lat, 180.0), w, h);
        let screen_y = core.camera.world_to_screen(from).y;
        ops.push(DrawOp::GridLine { from, to });
        ops.push(DrawOp::GridLabel {
            text: format!("{lat:.0}°"),
            at: Point::new(GRID_LABEL_PAD_PX, screen_y),
        });
    }
}

/// Multiples of `spacing` within `[min, max]`, computed by integer index so
/// long runs do not accumulate float drift.
fn steps(min: f64, max: f64, spacing: f64) -> impl Iterator<Item = f64> {
    #[allow(clippy::cast_possible_truncation)]
    let first = (min / spacing).ceil() as i64;
    #[allow(clippy::cast_possible_truncation)]
    let last = (max / spacing).floor() as i64;
    #[allow(clippy::cast_precision_loss)]
    (first..=last).map(move |i| i as f64 * spacing)
}

/// Resolve an icon against the cache. Image icons fall back to the default
/// glyph until loaded; paths the cache has never seen are queued for loading
/// (at most once per frame).
fn resolve_icon<T>(
    icon: IconRef,
    icons: &IconCache<T>,
    requests: &mut Vec<String>,
) -> MarkerIcon {
    match icon {
        IconRef::Glyph(glyph) => MarkerIcon::Glyph(glyph),
        IconRef::Image(path) => {
            if icons.get(path).is_some() {
                MarkerIcon::Image(path.to_owned())
            } else {
                if !icons.contains(path) && !requests.iter().any(|p| p == path) {
                    requests.push(path.to_owned());
                }
                MarkerIcon::Glyph(icons::DEFAULT_GLYPH)
            }
        }
    }
}
