//! Notification widget: drawer lifecycle, trigger badge, and badge polling.
//!
//! SYSTEM CONTEXT
//! ==============
//! `initialize` resolves the trigger, mounts the drawer and trigger content,
//! binds activation keys, and starts the badge poll. After that, every
//! operation goes through the `Copy` [`Notifications`] handle, which is
//! what event handlers and spawned requests capture.
//!
//! CONCURRENCY
//! ===========
//! Drawer loads and badge polls run as independent `spawn_local` tasks.
//! Their results are applied to the shared state in completion order with
//! no request sequencing.

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use crate::components::notification_drawer::{BACKDROP_ID, DRAWER_ID, NotificationDrawer};
use crate::components::notification_trigger::NotificationTriggerContent;
use crate::config::WidgetConfig;
use crate::net::api;
use crate::state::notifications::NotificationState;
use crate::util::dom::set_body_class;
use crate::util::listener::{EventBinding, is_activation_key, is_escape_key};
use crate::util::poller::Poller;
use crate::widgets::anchors;

pub const TRIGGER_MARKER_SELECTOR: &str = r#"[data-notification-trigger="true"]"#;
pub const TRIGGER_LABEL: &str = "Notifications";
pub const TRIGGER_CLASS: &str = "notification-trigger";
pub const BODY_OPEN_CLASS: &str = "notification-open";

/// Cheap handle to the drawer state and its endpoint.
#[derive(Clone, Copy)]
pub struct Notifications {
    state: RwSignal<NotificationState>,
    endpoint: StoredValue<String>,
}

impl Notifications {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            state: RwSignal::new(NotificationState::default()),
            endpoint: StoredValue::new(config.endpoints.notifications.clone()),
        }
    }

    pub fn state(self) -> RwSignal<NotificationState> {
        self.state
    }

    pub fn open(self) {
        self.state.update(NotificationState::open);
        set_body_class(BODY_OPEN_CLASS, true);
    }

    pub fn close(self) {
        self.state.update(NotificationState::close);
        set_body_class(BODY_OPEN_CLASS, false);
    }

    /// Reload the drawer body and badge from the server.
    pub fn load_list(self) {
        self.state.update(NotificationState::begin_load);
        let endpoint = self.endpoint.get_value();
        leptos::task::spawn_local(async move {
            let result = api::fetch_notifications(&endpoint).await;
            if let Err(err) = &result {
                log::warn!("notifications unavailable: {err}");
            }
            self.state.try_update(|s| s.apply_list_result(result));
        });
    }

    /// Refresh only the badge count.
    pub fn refresh_badge(self) {
        let endpoint = self.endpoint.get_value();
        leptos::task::spawn_local(async move {
            let result = api::fetch_notifications(&endpoint).await;
            if let Err(err) = &result {
                log::debug!("badge refresh failed: {err}");
            }
            self.state.try_update(|s| s.apply_badge_result(result));
        });
    }

    fn open_and_load(self) {
        self.open();
        self.load_list();
    }
}

/// Live notification widget. Dropping it unbinds listeners and stops
/// polling; [`NotificationWidget::teardown`] also removes the drawer.
pub struct NotificationWidget {
    notifications: Notifications,
    poller: Poller,
    _bindings: Vec<EventBinding>,
}

impl NotificationWidget {
    /// Set up the widget on `document`.
    ///
    /// Returns `Ok(None)` when there is no trigger to attach to or the
    /// drawer is already on the page.
    ///
    /// # Errors
    ///
    /// Returns the DOM exception if a listener cannot be registered.
    pub fn initialize(document: &Document, config: &WidgetConfig) -> Result<Option<Self>, JsValue> {
        if document.get_element_by_id(DRAWER_ID).is_some() {
            log::debug!("notification drawer already present");
            return Ok(None);
        }
        let Some(trigger) = find_trigger(document, &config.selectors.notification_menu) else {
            log::debug!("no notification trigger on this page");
            return Ok(None);
        };
        let Some(body) = document.body() else {
            return Ok(None);
        };

        let notifications = Notifications::new(config);
        let state = notifications.state();

        let on_close = Callback::new(move |()| notifications.close());
        leptos::mount::mount_to(body, move || view! { <NotificationDrawer state=state on_close=on_close/> }).forget();

        rewrite_trigger(&trigger, state)?;

        let bindings = vec![
            EventBinding::bind(&trigger, "click", move |event| {
                event.prevent_default();
                notifications.open_and_load();
            })?,
            EventBinding::on_key(&trigger, move |event| {
                if is_activation_key(event) {
                    event.prevent_default();
                    notifications.open_and_load();
                }
            })?,
            EventBinding::on_key(document, move |event| {
                if is_escape_key(event) {
                    notifications.close();
                }
            })?,
        ];

        notifications.refresh_badge();
        let poller = Poller::start(config.badge_poll_millis(), move || notifications.refresh_badge());

        Ok(Some(Self { notifications, poller, _bindings: bindings }))
    }

    /// Stop polling, unbind listeners, and remove the drawer.
    pub fn teardown(mut self, document: &Document) {
        self.poller.stop();
        self.notifications.close();
        anchors::remove_by_id(document, DRAWER_ID);
        anchors::remove_by_id(document, BACKDROP_ID);
    }
}

fn find_trigger(document: &Document, menu_selector: &str) -> Option<HtmlElement> {
    anchors::query(document, TRIGGER_MARKER_SELECTOR)
        .or_else(|| anchors::find_by_label(document, menu_selector, TRIGGER_LABEL))
}

fn rewrite_trigger(trigger: &HtmlElement, state: RwSignal<NotificationState>) -> Result<(), JsValue> {
    trigger.class_list().add_1(TRIGGER_CLASS)?;
    anchors::mark_as_button(trigger);
    trigger.set_inner_html("");
    leptos::mount::mount_to(trigger.clone(), move || view! { <NotificationTriggerContent state=state/> }).forget();
    Ok(())
}
