use super::*;

use std::collections::HashSet;

// --- Lookup tables ---

#[test]
fn texture_keys_are_unique() {
    let mut seen = HashSet::new();
    for style in TEXTURE_STYLES {
        assert!(seen.insert(style.key), "duplicate texture key {}", style.key);
    }
}

#[test]
fn every_terrain_category_resolves() {
    for (category, key) in TERRAIN_TEXTURES {
        assert!(
            style(key).is_some(),
            "category {category} points at unknown texture {key}"
        );
    }
}

#[test]
fn default_key_resolves() {
    assert!(style(DEFAULT_TEXTURE_KEY).is_some());
}

#[test]
fn style_lookup_by_key() {
    let toxic = style("toxic").unwrap();
    assert_eq!(toxic.color, "#7dff00");
    assert_eq!(toxic.pattern, Pattern::Toxic);
    assert!(style("nonexistent").is_none());
}

// --- Resolution chain ---

#[test]
fn category_selects_its_texture() {
    assert_eq!(texture_for("Toxique", None).key, "toxic");
    assert_eq!(texture_for("Gelée", None).key, "ice");
    assert_eq!(texture_for("Glacée", None).key, "ice");
    assert_eq!(texture_for("Brûlante", None).key, "volcanic");
    assert_eq!(texture_for("Paradisiaque", None).key, "paradise");
}

#[test]
fn override_beats_category() {
    assert_eq!(texture_for("Toxique", Some("ice")).key, "ice");
}

#[test]
fn unknown_category_falls_back_to_default() {
    assert_eq!(texture_for("Inconnue", None).key, DEFAULT_TEXTURE_KEY);
}

#[test]
fn unknown_override_falls_back_to_default() {
    assert_eq!(texture_for("Toxique", Some("plaid")).key, DEFAULT_TEXTURE_KEY);
}

#[test]
fn empty_category_falls_back_to_default() {
    assert_eq!(texture_for("", None).key, DEFAULT_TEXTURE_KEY);
}
