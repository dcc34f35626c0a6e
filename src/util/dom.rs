//! Page-level presentation attributes and body state classes.
//!
//! Applies `data-theme`, `data-font-size` and `data-language` to the
//! `<html>` element and announces the change with a `userPreferencesApplied`
//! `CustomEvent` on `window`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Everything here is best-effort: a missing document or a rejected DOM call
//! is logged and skipped, and native builds no-op so state tests stay
//! deterministic.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::state::preferences::{PreferenceRecord, PresentationTarget};

pub const THEME_ATTR: &str = "data-theme";
pub const FONT_SIZE_ATTR: &str = "data-font-size";
pub const LANGUAGE_ATTR: &str = "data-language";
pub const PREFERENCES_EVENT: &str = "userPreferencesApplied";

/// Attribute/value pairs written to the document root for `record`.
pub fn root_attributes(record: &PreferenceRecord) -> [(&'static str, String); 3] {
    [
        (THEME_ATTR, record.appearance.as_str().to_owned()),
        (FONT_SIZE_ATTR, record.font_size.as_str().to_owned()),
        (LANGUAGE_ATTR, record.language.clone()),
    ]
}

/// [`PresentationTarget`] backed by the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl PresentationTarget for DocumentRoot {
    fn present(&self, record: &PreferenceRecord, raw: &serde_json::Value) {
        #[cfg(feature = "csr")]
        {
            if let Some(root) = document().and_then(|doc| doc.document_element()) {
                for (name, value) in root_attributes(record) {
                    if root.set_attribute(name, &value).is_err() {
                        log::warn!("could not set {name} on document root");
                    }
                }
            }
            dispatch_preferences_event(raw);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (record, raw);
        }
    }
}

/// Add or remove a state class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = document().and_then(|doc| doc.body()) else {
            return;
        };
        let classes = body.class_list();
        let result = if enabled { classes.add_1(class) } else { classes.remove_1(class) };
        if result.is_err() {
            log::debug!("could not toggle body class {class}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (class, enabled);
    }
}

/// `document.readyState` value while the parser is still running.
pub const READY_STATE_LOADING: &str = "loading";

/// Whether a `document.readyState` value means `DOMContentLoaded` is still
/// ahead.
pub fn is_still_parsing(ready_state: &str) -> bool {
    ready_state == READY_STATE_LOADING
}

#[cfg(feature = "csr")]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "csr")]
fn dispatch_preferences_event(raw: &serde_json::Value) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let detail = serde_json::to_string(raw)
        .map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))
        .and_then(|json| js_sys::JSON::parse(&json));
    let Ok(detail) = detail else {
        log::warn!("preferences event detail could not be encoded");
        return;
    };

    let init = web_sys::CustomEventInit::new();
    init.set_detail(&detail);
    match web_sys::CustomEvent::new_with_event_init_dict(PREFERENCES_EVENT, &init) {
        Ok(event) => {
            if window.dispatch_event(&event).is_err() {
                log::warn!("{PREFERENCES_EVENT} dispatch failed");
            }
        }
        Err(_) => log::warn!("{PREFERENCES_EVENT} could not be created"),
    }
}
