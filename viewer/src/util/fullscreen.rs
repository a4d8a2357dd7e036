//! Fullscreen toggling for the map container.

use web_sys::Element;

/// Enter fullscreen on `target`, or leave fullscreen if some element
/// currently holds it. Rejected requests (e.g. without a user gesture) are
/// logged and otherwise ignored.
pub fn toggle(target: &Element) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
        return;
    }
    if let Err(err) = target.request_fullscreen() {
        log::warn!("fullscreen unavailable: {err:?}");
    }
}

/// Whether any element is currently fullscreen.
#[must_use]
pub fn is_active() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.fullscreen_element())
        .is_some()
}
