//! Lookup of the host-page elements the widgets attach to.
//!
//! Each widget resolves its anchors once during initialization. A missing
//! anchor means the widget skips itself as a unit.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// First element matching `selector`, as an `HtmlElement`.
pub fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    match document.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        Err(_) => {
            log::warn!("invalid selector {selector:?}");
            None
        }
    }
}

/// All elements matching `selector` that are `HtmlElement`s.
pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("invalid selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Trimmed text content equals `label` exactly.
pub fn has_label(element: &Element, label: &str) -> bool {
    element.text_content().is_some_and(|text| text.trim() == label)
}

/// First element matching `selector` whose trimmed text is `label`.
pub fn find_by_label(document: &Document, selector: &str, label: &str) -> Option<HtmlElement> {
    query_all(document, selector).into_iter().find(|el| has_label(el, label))
}

/// Make an existing element keyboard-focusable and announce it as a button.
pub fn mark_as_button(element: &HtmlElement) {
    let ok = element.set_attribute("role", "button").is_ok() && element.set_attribute("tabindex", "0").is_ok();
    if !ok {
        log::debug!("could not mark trigger as button");
    }
}

/// Remove the element with `id`, if present.
pub fn remove_by_id(document: &Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.remove();
    }
}
