//! Leptos views injected into the host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components only render widget state and report user intent through
//! callbacks; DOM lookup, network calls, and timers live in `widgets`.

pub mod assistant_modal;
pub mod notification_drawer;
pub mod notification_trigger;
