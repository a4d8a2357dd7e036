//! Geographic coordinates and the free-text coordinate grammar.
//!
//! Base and point-of-interest records store their position as a raw string
//! exactly as the player typed it (`"+12.34, -56.78"`). Parsing happens at
//! scene-build time; records whose string does not parse are simply not
//! plotted. The same grammar backs form validation in the host application.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

use std::fmt;

/// Both axes are validated against this symmetric range. The game reports
/// latitudes across the full ±180° span, so latitude is deliberately not
/// clamped to the geographic ±90°.
pub const AXIS_LIMIT_DEG: f64 = 180.0;

/// A parsed latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
}

impl GeoCoordinate {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parse a coordinate string of the form `"<±lat>, <±lon>"`.
    ///
    /// Each axis is a signed decimal number (optional sign, at least one
    /// integer digit, optional fractional part). Whitespace around either
    /// number is ignored. Returns `None` for malformed input or values
    /// outside ±[`AXIS_LIMIT_DEG`].
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (lat_raw, lon_raw) = raw.split_once(',')?;
        let lat = parse_axis(lat_raw)?;
        let lon = parse_axis(lon_raw)?;
        if !in_range(lat) || !in_range(lon) {
            return None;
        }
        Some(Self { lat, lon })
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.2}, {:+.2}", self.lat, self.lon)
    }
}

fn in_range(value: f64) -> bool {
    (-AXIS_LIMIT_DEG..=AXIS_LIMIT_DEG).contains(&value)
}

/// Parse one axis: optional sign, digits, optional `.` and more digits.
/// Stricter than `f64::from_str` — rejects exponents, infinities, and
/// bare fractions like `".5"`.
fn parse_axis(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let body = trimmed
        .strip_prefix(['+', '-'])
        .unwrap_or(trimmed);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !frac_part.is_none_or(|f| f.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    trimmed.parse().ok()
}
