//! Asynchronous icon asset cache.
//!
//! The engine never blocks on an image: a marker whose icon is not yet
//! loaded falls back to its glyph, and the host re-renders once the load
//! settles. This module owns only the bookkeeping — which paths are pending,
//! ready, or failed — so concurrent requests for the same path collapse into
//! a single fetch. The actual `HtmlImageElement` plumbing lives in the host.
//!
//! Each path settles independently: one stalled or broken icon never holds
//! back the others.
//!
//! Generic over the image handle type so the state machine is testable
//! without a browser (`T = web_sys::HtmlImageElement` in production).

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use std::collections::HashMap;

/// Load state for a single asset path.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AssetState<T> {
    /// A fetch is in flight.
    Pending,
    /// The asset is available for drawing.
    Ready(T),
    /// The fetch failed; the asset is drawn as its fallback glyph.
    Failed,
}

/// Cache of icon images keyed by asset path.
#[derive(Debug)]
pub struct IconCache<T> {
    entries: HashMap<String, AssetState<T>>,
}

impl<T> IconCache<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Claim a path for loading. Returns `true` exactly once per path until
    /// that load settles — callers must only start a fetch on `true`. A path
    /// that previously failed may be claimed again.
    pub fn begin(&mut self, path: &str) -> bool {
        match self.entries.get(path) {
            None | Some(AssetState::Failed) => {
                self.entries.insert(path.to_owned(), AssetState::Pending);
                true
            }
            Some(AssetState::Pending | AssetState::Ready(_)) => false,
        }
    }

    /// Record a successful load.
    pub fn resolve(&mut self, path: &str, image: T) {
        self.entries.insert(path.to_owned(), AssetState::Ready(image));
    }

    /// Record a failed load.
    pub fn fail(&mut self, path: &str) {
        self.entries.insert(path.to_owned(), AssetState::Failed);
    }

    /// Synchronous lookup for an already-loaded asset.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&T> {
        match self.entries.get(path) {
            Some(AssetState::Ready(image)) => Some(image),
            _ => None,
        }
    }

    /// Whether this path has ever been claimed (pending, ready, or failed).
    /// The scene builder uses this to request each path at most once.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }
}

impl<T> Default for IconCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
