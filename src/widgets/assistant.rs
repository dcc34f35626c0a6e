//! Assistant widget: sidebar trigger, lazy modal, and chat requests.

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::components::assistant_modal::{AssistantModal, MODAL_ID, TRIGGER_MARKUP};
use crate::config::WidgetConfig;
use crate::net::api;
use crate::state::assistant::AssistantState;
use crate::util::dom::{document, set_body_class};
use crate::util::listener::{EventBinding, is_activation_key, is_escape_key};
use crate::widgets::anchors;

pub const TRIGGER_MARKER_ATTR: &str = "data-assistant-trigger";
pub const SETTINGS_LABEL: &str = "Settings";
pub const BODY_OPEN_CLASS: &str = "assistant-open";

/// Cheap handle to the chat state and request settings.
#[derive(Clone, Copy)]
pub struct Assistant {
    state: RwSignal<AssistantState>,
    endpoint: StoredValue<String>,
    history_limit: usize,
}

impl Assistant {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            state: RwSignal::new(AssistantState::default()),
            endpoint: StoredValue::new(config.endpoints.chat.clone()),
            history_limit: config.history_limit,
        }
    }

    /// Open the modal, building it on first use.
    pub fn open(self) {
        self.ensure_modal();
        self.state.update(AssistantState::open);
        set_body_class(BODY_OPEN_CLASS, true);
    }

    pub fn close(self) {
        self.state.update(AssistantState::close);
        set_body_class(BODY_OPEN_CLASS, false);
    }

    /// Send the current draft. No-op while a send is in flight or when the
    /// draft is blank.
    pub fn send_message(self) {
        let Some(request) = self.state.try_update(|s| s.begin_send(self.history_limit)).flatten() else {
            return;
        };
        let endpoint = self.endpoint.get_value();
        leptos::task::spawn_local(async move {
            let outcome = api::send_chat(&endpoint, &request).await;
            if let Err(err) = &outcome {
                log::warn!("assistant request failed: {err}");
            }
            self.state.try_update(|s| s.finish_send(outcome));
        });
    }

    fn ensure_modal(self) {
        let Some(document) = document() else {
            return;
        };
        if document.get_element_by_id(MODAL_ID).is_some() {
            return;
        }
        let Some(body) = document.body() else {
            return;
        };
        let state = self.state;
        let on_send = Callback::new(move |()| self.send_message());
        let on_close = Callback::new(move |()| self.close());
        leptos::mount::mount_to(body, move || view! { <AssistantModal state=state on_send=on_send on_close=on_close/> })
            .forget();
    }
}

/// Live assistant widget; dropping it unbinds its listeners.
pub struct AssistantWidget {
    assistant: Assistant,
    trigger: HtmlElement,
    _bindings: Vec<EventBinding>,
}

impl AssistantWidget {
    /// Insert the sidebar trigger and bind it.
    ///
    /// Returns `Ok(None)` when a trigger already exists or the page has no
    /// sidebar list.
    ///
    /// # Errors
    ///
    /// Returns the DOM exception if the trigger cannot be created or bound.
    pub fn initialize(document: &Document, config: &WidgetConfig) -> Result<Option<Self>, JsValue> {
        if anchors::query(document, &format!("[{TRIGGER_MARKER_ATTR}]")).is_some() {
            log::debug!("assistant trigger already present");
            return Ok(None);
        }
        let Some(list) = anchors::query(document, &config.selectors.sidebar_list) else {
            log::debug!("no sidebar list for the assistant trigger");
            return Ok(None);
        };

        let trigger = document.create_element("li")?.dyn_into::<HtmlElement>()?;
        trigger.set_class_name("assistant-trigger");
        trigger.set_attribute(TRIGGER_MARKER_ATTR, "true")?;
        anchors::mark_as_button(&trigger);
        trigger.set_inner_html(TRIGGER_MARKUP);
        insert_after_settings(&list, &trigger)?;

        let assistant = Assistant::new(config);
        let bindings = vec![
            EventBinding::bind(&trigger, "click", move |event| {
                event.prevent_default();
                assistant.open();
            })?,
            EventBinding::on_key(&trigger, move |event| {
                if is_activation_key(event) {
                    event.prevent_default();
                    assistant.open();
                }
            })?,
            EventBinding::on_key(document, move |event| {
                if is_escape_key(event) {
                    assistant.close();
                }
            })?,
        ];

        Ok(Some(Self { assistant, trigger, _bindings: bindings }))
    }

    /// Close the modal and remove the trigger and modal from the page.
    pub fn teardown(self, document: &Document) {
        self.assistant.close();
        self.trigger.remove();
        if let Some(modal) = document.get_element_by_id(MODAL_ID) {
            if let Some(backdrop) = modal.previous_element_sibling() {
                backdrop.remove();
            }
            modal.remove();
        }
    }
}

/// Insert `trigger` right after the "Settings" entry, or at the end.
fn insert_after_settings(list: &HtmlElement, trigger: &HtmlElement) -> Result<(), JsValue> {
    let children = list.children();
    let settings = (0..children.length())
        .filter_map(|i| children.item(i))
        .find(|child| anchors::has_label(child, SETTINGS_LABEL));

    match settings {
        Some(entry) => {
            list.insert_before(trigger, entry.next_sibling().as_ref())?;
        }
        None => {
            list.append_child(trigger)?;
        }
    }
    Ok(())
}
