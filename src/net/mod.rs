//! Networking modules for the page's JSON endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the shared wire schema
//! and error type.

pub mod api;
pub mod types;
