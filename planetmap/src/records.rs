//! Record types consumed from the storage layer.
//!
//! These mirror the wire shape of the catalogue backend's planet detail
//! payload. Coordinates stay raw strings and are parsed on demand at
//! scene-build time — a record with an unparsable coordinate is a valid
//! record that simply has no plottable position.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coords::GeoCoordinate;

/// A planet record, reduced to what the map needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    /// Unique identifier; part of the texture invalidation key.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Terrain category string (e.g. `"Toxique"`, `"Gelée"`). Selects the
    /// background texture when no override is set.
    pub kind: String,
    /// Explicit texture pattern key overriding the category lookup.
    #[serde(default)]
    pub texture: Option<String>,
}

/// A player base located on a planet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Base {
    /// Display name, drawn as the marker label.
    pub name: String,
    /// Raw coordinate string as entered by the player, if any.
    #[serde(default)]
    pub coordinates: Option<String>,
}

impl Base {
    /// The plottable position, if the coordinate string parses.
    #[must_use]
    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        parse_opt(self.coordinates.as_deref())
    }
}

/// A point of interest located on a planet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Display name, drawn as the marker label.
    pub name: String,
    /// POI category string (e.g. `"Ruines"`); selects the marker icon.
    #[serde(default)]
    pub kind: Option<String>,
    /// Raw coordinate string as entered by the player, if any.
    #[serde(default)]
    pub coordinates: Option<String>,
}

impl PointOfInterest {
    /// The plottable position, if the coordinate string parses.
    #[must_use]
    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        parse_opt(self.coordinates.as_deref())
    }
}

/// The full payload the host fetches for one planet's map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapData {
    pub planet: Planet,
    #[serde(default)]
    pub bases: Vec<Base>,
    #[serde(default)]
    pub pois: Vec<PointOfInterest>,
}

fn parse_opt(raw: Option<&str>) -> Option<GeoCoordinate> {
    raw.and_then(GeoCoordinate::parse)
}
