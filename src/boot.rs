//! Page bootstrap: configuration, preference sync, and widget startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wasm module's start function waits for the document to finish
//! parsing, then builds one [`Session`]. The session owns the reactive
//! owner and every widget, and lives in a thread-local until
//! [`teardown`] is called from the page.
//!
//! ERROR HANDLING
//! ==============
//! A bad config blob is logged and replaced by defaults. A widget whose
//! setup fails is logged and skipped; the others still load.

use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::config::{CONFIG_ELEMENT_ID, WidgetConfig};
use crate::net::api;
use crate::state::preferences::{apply_authoritative, apply_cached};
use crate::util::dom::{DocumentRoot, document, is_still_parsing};
use crate::util::storage::LocalPreferenceCache;
use crate::widgets::assistant::AssistantWidget;
use crate::widgets::avatar::AvatarSync;
use crate::widgets::notifications::NotificationWidget;

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Everything started for one page load.
pub struct Session {
    owner: Owner,
    document: Document,
    notifications: Option<NotificationWidget>,
    assistant: Option<AssistantWidget>,
    avatars: Option<AvatarSync>,
}

impl Session {
    /// Sync preferences and start every widget whose anchors are present.
    pub fn boot(document: Document, config: &WidgetConfig) -> Self {
        let owner = Owner::new();
        let (notifications, assistant, avatars) = owner.with(|| {
            sync_preferences(config);
            (
                started("notifications", NotificationWidget::initialize(&document, config)),
                started("assistant", AssistantWidget::initialize(&document, config)),
                started("avatar", AvatarSync::load(&document, config).map(Some)),
            )
        });
        Self { owner, document, notifications, assistant, avatars }
    }

    /// Remove injected elements, stop polling, and release listeners.
    pub fn teardown(self) {
        if let Some(widget) = self.notifications {
            widget.teardown(&self.document);
        }
        if let Some(widget) = self.assistant {
            widget.teardown(&self.document);
        }
        drop(self.avatars);
        self.owner.cleanup();
    }
}

fn started<T>(name: &str, result: Result<Option<T>, wasm_bindgen::JsValue>) -> Option<T> {
    match result {
        Ok(Some(widget)) => {
            log::info!("{name} widget ready");
            Some(widget)
        }
        Ok(None) => None,
        Err(err) => {
            log::error!("{name} widget failed to start: {err:?}");
            None
        }
    }
}

/// Apply cached preferences now, then the server's once they arrive.
fn sync_preferences(config: &WidgetConfig) {
    let cache = LocalPreferenceCache::new(config.storage_key.clone());
    if let Some(record) = apply_cached(&cache, &DocumentRoot) {
        log::debug!("applied cached preferences: {}", record.appearance.as_str());
    }

    let endpoint = config.endpoints.settings.clone();
    leptos::task::spawn_local(async move {
        let fetched = api::fetch_settings(&endpoint).await;
        if let Err(err) = &fetched {
            log::warn!("settings unavailable: {err}");
        }
        apply_authoritative(&cache, &DocumentRoot, fetched);
    });
}

/// Read the page's config override, falling back to defaults.
pub fn load_config(document: &Document) -> WidgetConfig {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    WidgetConfig::from_json(raw.as_deref()).unwrap_or_else(|err| {
        log::warn!("ignoring widget config: {err}");
        WidgetConfig::default()
    })
}

fn boot_now() {
    let Some(document) = document() else {
        log::error!("no document; widgets not started");
        return;
    };
    teardown();
    let config = load_config(&document);
    let session = Session::boot(document, &config);
    SESSION.with(|slot| *slot.borrow_mut() = Some(session));
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    // Preference and avatar fetches spawn before any view is mounted.
    if any_spawner::Executor::init_wasm_bindgen().is_err() {
        log::debug!("task executor already initialized");
    }

    let Some(document) = document() else {
        return;
    };
    if is_still_parsing(&document.ready_state()) {
        let on_ready = Closure::once_into_js(boot_now);
        if document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .is_err()
        {
            log::error!("could not wait for DOMContentLoaded");
        }
    } else {
        boot_now();
    }
}

/// Tear down the running session, if any.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(session) = SESSION.with(|slot| slot.borrow_mut().take()) {
        session.teardown();
    }
}
