//! Application root: resolves the planet and mounts the map host.

use leptos::prelude::*;
use uuid::Uuid;

use crate::components::map_host::MapHost;
use crate::net;

/// Planet id taken from the `?planet=<uuid>` query parameter.
fn planet_id_from_url() -> Option<Uuid> {
    let search = web_sys::window()?.location().search().ok()?;
    search
        .strip_prefix('?')?
        .split('&')
        .find_map(|pair| pair.strip_prefix("planet="))
        .and_then(|raw| Uuid::parse_str(raw).ok())
}

/// Application root — fetches the map payload on mount.
#[component]
pub fn App() -> impl IntoView {
    let data = LocalResource::new(|| async {
        match planet_id_from_url() {
            Some(id) => net::fetch_map_data(id).await,
            None => None,
        }
    });

    view! {
        <main class="map-app">
            <Suspense fallback=move || {
                view! { <p class="map-app__status">"Chargement de la carte..."</p> }
            }>
                {move || {
                    data.get()
                        .map(|payload| match payload {
                            Some(map) => view! { <MapHost data=map/> }.into_any(),
                            None => {
                                view! { <p class="map-app__status">"Carte indisponible."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </main>
    }
}
