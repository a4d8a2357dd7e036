//! Shared numeric constants for the planet map crate.

// ── Canvas ──────────────────────────────────────────────────────

/// Default map canvas width in pixels. Doubles as the world-space width:
/// one world unit is one background-bitmap pixel at zoom 1.
pub const MAP_WIDTH: f64 = 1600.0;

/// Default map canvas height in pixels.
pub const MAP_HEIGHT: f64 = 800.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.5;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 50.0;

/// Multiplier applied per discrete zoom button press.
pub const BUTTON_ZOOM_FACTOR: f64 = 1.5;

/// Multiplier applied per wheel tick when zooming in.
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Multiplier applied per wheel tick when zooming out.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

// ── Grid ────────────────────────────────────────────────────────

/// Grid spacing tiers as `(zoom upper bound, spacing in degrees)`.
/// The first tier whose bound exceeds the current zoom wins.
pub const GRID_TIERS: [(f64, f64); 3] = [(5.0, 30.0), (15.0, 10.0), (30.0, 5.0)];

/// Grid spacing in degrees once zoomed past every tier bound.
pub const GRID_FINE_SPACING_DEG: f64 = 1.0;

/// Distance from the canvas edge to grid labels, in screen pixels.
pub const GRID_LABEL_PAD_PX: f64 = 12.0;

// ── Markers ─────────────────────────────────────────────────────

/// Marker pin radius in screen pixels, independent of zoom.
pub const MARKER_RADIUS_PX: f64 = 8.0;

/// Font size for emoji marker glyphs, in screen pixels.
pub const MARKER_FONT_PX: f64 = 16.0;

/// Edge length for custom marker icon images, in screen pixels.
pub const MARKER_ICON_PX: f64 = 24.0;

/// Font size for marker name labels, in screen pixels.
pub const MARKER_LABEL_FONT_PX: f64 = 11.0;

/// Vertical offset from marker center to its name label, in screen pixels.
pub const MARKER_LABEL_OFFSET_PX: f64 = 20.0;
