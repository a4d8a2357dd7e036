//! Marker icon configuration: POI category → icon, plus marker accents.
//!
//! Most categories render an emoji glyph directly; a few ship a custom image
//! under `/icons/` that is loaded asynchronously through the asset cache.
//! New custom icons are added here as they are drawn.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

/// An icon is either an embedded glyph (no load needed) or a path to an
/// image asset that must be fetched before it can be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconRef {
    /// Emoji rendered straight into the canvas.
    Glyph(&'static str),
    /// Site-relative path to an image asset.
    Image(&'static str),
}

/// POI category → icon table.
pub const POI_ICONS: &[(&str, IconRef)] = &[
    ("Ruines", IconRef::Glyph("🏛️")),
    ("Monument", IconRef::Glyph("🗿")),
    ("Épave", IconRef::Glyph("💀")),
    ("Site archéologique", IconRef::Glyph("⚱️")),
    ("Transmission", IconRef::Glyph("📡")),
    ("Portail", IconRef::Glyph("🌀")),
    ("Grotte", IconRef::Glyph("🕳️")),
    ("Structure", IconRef::Glyph("🏗️")),
    ("Observatoire", IconRef::Glyph("🔭")),
    ("Tour de communication", IconRef::Glyph("📡")),
    ("Abri", IconRef::Image("/icons/abri.png")),
];

/// Glyph drawn when no category-specific icon applies, and while a custom
/// image icon is still loading (or failed to load).
pub const DEFAULT_GLYPH: &str = "📍";

/// Fallback icon for categories without an entry (and for POIs with no
/// category at all).
pub const DEFAULT_POI_ICON: IconRef = IconRef::Glyph(DEFAULT_GLYPH);

/// Glyph used for every base marker.
pub const BASE_ICON: IconRef = IconRef::Glyph("🏠");

/// Pin accent color for base markers.
pub const BASE_ACCENT: &str = "#00ff88";

/// Pin accent color for POI markers.
pub const POI_ACCENT: &str = "#ffd60a";

/// Look up the icon for a POI category.
#[must_use]
pub fn poi_icon(kind: Option<&str>) -> IconRef {
    kind.and_then(|kind| {
        POI_ICONS
            .iter()
            .find(|(name, _)| *name == kind)
            .map(|(_, icon)| *icon)
    })
    .unwrap_or(DEFAULT_POI_ICON)
}
