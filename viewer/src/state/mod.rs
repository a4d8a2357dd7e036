//! Application state shared between components.

pub mod map_view;
