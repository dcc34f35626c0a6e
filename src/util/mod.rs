//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from widget logic.
//! `listener` and `poller` wrap browser handles and only exist in csr
//! builds; the rest compile everywhere.

pub mod avatar;
pub mod dom;
#[cfg(feature = "csr")]
pub mod listener;
pub mod markdown;
#[cfg(feature = "csr")]
pub mod poller;
pub mod storage;
pub mod time_label;
