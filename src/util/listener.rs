//! Owned DOM event listeners.
//!
//! An [`EventBinding`] keeps its closure alive and removes the listener when
//! dropped, so widgets can hold their bindings and release them on teardown
//! instead of leaking `Closure::forget` handles.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, KeyboardEvent};

pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    /// Attach `handler` to `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns the DOM exception if the listener cannot be registered.
    pub fn bind<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }

    /// Attach a `keydown` handler that only sees keyboard events.
    ///
    /// # Errors
    ///
    /// Same as [`EventBinding::bind`].
    pub fn on_key<F>(target: &EventTarget, mut handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(&KeyboardEvent) + 'static,
    {
        Self::bind(target, "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                handler(key_event);
            }
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        if self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::debug!("could not remove {} listener", self.event);
        }
    }
}

/// Enter or Space: the keys that activate a `role="button"` element.
pub fn is_activation_key(event: &KeyboardEvent) -> bool {
    matches!(event.key().as_str(), "Enter" | " ")
}

pub fn is_escape_key(event: &KeyboardEvent) -> bool {
    event.key() == "Escape"
}
