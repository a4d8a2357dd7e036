//! Browser plumbing helpers.

pub mod frame;
pub mod fullscreen;
