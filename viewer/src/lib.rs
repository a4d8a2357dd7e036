//! # viewer
//!
//! Leptos + WASM frontend for the planetary map. Fetches a planet's map
//! payload from the catalogue API and hosts the imperative `planetmap`
//! engine through the `MapHost` bridge component.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;
