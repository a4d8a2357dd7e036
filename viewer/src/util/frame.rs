//! `requestAnimationFrame` scheduling.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Run `f` on the next animation frame.
pub fn request(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if window.request_animation_frame(callback.unchecked_ref()).is_err() {
        log::warn!("requestAnimationFrame unavailable; frame dropped");
    }
}
