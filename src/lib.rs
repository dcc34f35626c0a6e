//! # socialsync-widgets
//!
//! Leptos + WASM widgets injected into server-rendered SocialSync pages:
//! the notification drawer and badge, the AI assistant modal, avatar
//! synchronization, and user preference application.
//!
//! State, wire types, config and formatting compile natively so they can be
//! tested without a browser. Widget wiring and the wasm entry point are only
//! built with the `csr` feature.

pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
pub mod boot;
#[cfg(feature = "csr")]
pub mod widgets;
