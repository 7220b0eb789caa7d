//! Internal DOM focus helpers for desktop shell widgets.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Focuses an element by ID and reports whether a focusable HTML element was found.
#[cfg(target_arch = "wasm32")]
pub(super) fn focus_element_by_id(id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    let _ = element.focus();
    true
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn focus_element_by_id(_: &str) -> bool {
    false
}
