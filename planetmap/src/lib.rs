//! Interactive planetary map engine for the exploration catalogue.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the full lifecycle of the map canvas: parsing recorded coordinates,
//! projecting them onto a textured planet backdrop, maintaining camera state
//! for pan/zoom, generating procedural terrain textures into a cached
//! offscreen bitmap, tracking asynchronous icon loads, and repainting the
//! scene. The host UI layer is responsible only for wiring DOM events to the
//! engine and acting on the [`engine::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::MapCore`] |
//! | [`records`] | Planet / base / point-of-interest record types |
//! | [`coords`] | Coordinate grammar and geographic coordinate type |
//! | [`project`] | Equirectangular projection and its inverse |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Input event types and the pan gesture state |
//! | [`texture`] | Terrain lookup tables and procedural backdrop painting |
//! | [`assets`] | Deduplicating icon asset cache |
//! | [`icons`] | POI icon and marker accent configuration |
//! | [`scene`] | Per-frame immutable draw plan |
//! | [`render`] | Draw plan execution against the 2d context |
//! | [`consts`] | Shared numeric constants (zoom limits, marker sizes, etc.) |

pub mod assets;
pub mod camera;
pub mod consts;
pub mod coords;
pub mod engine;
pub mod icons;
pub mod input;
pub mod project;
pub mod records;
pub mod render;
pub mod scene;
pub mod texture;
