//! UI components.

pub mod map_host;
