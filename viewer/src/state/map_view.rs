use planetmap::coords::GeoCoordinate;

/// Live map telemetry consumed by chrome (toolbar readouts).
#[derive(Clone, Debug)]
pub struct MapViewState {
    pub cursor_geo: Option<GeoCoordinate>,
    pub zoom: f64,
}

impl Default for MapViewState {
    fn default() -> Self {
        Self { cursor_geo: None, zoom: 1.0 }
    }
}
