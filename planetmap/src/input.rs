//! Input model: mouse buttons, wheel deltas, and the pan gesture state.
//!
//! The host forwards raw DOM pointer/wheel events to the engine; this module
//! defines the types those entry points consume. The only tracked gesture is
//! panning — zoom is instantaneous per event and needs no state.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down = zoom out).
    pub dy: f64,
}

/// The active gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging the map.
    Panning {
        /// Pointer-minus-offset at drag start. While the drag is live the
        /// camera offset is recomputed as `pointer - grab`, so the world
        /// point under the cursor at drag start stays under the cursor.
        grab: Point,
    },
}
