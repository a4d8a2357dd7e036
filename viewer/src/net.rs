//! REST helper for fetching a planet's map payload.
//!
//! Callers get `Option` outputs instead of panics so a fetch failure
//! degrades to a placeholder instead of crashing the app.

use planetmap::records::MapData;
use uuid::Uuid;

/// Fetch the map payload for a planet from `/api/planets/{id}/map`.
/// Returns `None` on network or decode failure.
pub async fn fetch_map_data(planet_id: Uuid) -> Option<MapData> {
    let url = format!("/api/planets/{planet_id}/map");
    let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<MapData>().await.ok()
}
