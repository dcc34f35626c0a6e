//! `localStorage`-backed preferences cache.
//!
//! ERROR HANDLING
//! ==============
//! Storage that is disabled, full, or holding a corrupt blob reads as
//! "nothing cached"; a failed write is logged at `debug` and dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde_json::Value;

use crate::state::preferences::PreferenceStore;

/// Preferences cache under one fixed storage key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalPreferenceCache {
    key: String,
}

impl LocalPreferenceCache {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Parse a stored blob. `null` and unparseable text count as absent.
pub fn decode_cached(blob: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(blob) {
        Ok(Value::Null) | Err(_) => None,
        Ok(value) => Some(value),
    }
}

impl PreferenceStore for LocalPreferenceCache {
    fn load(&self) -> Option<Value> {
        #[cfg(feature = "csr")]
        {
            match local_storage()?.get_item(&self.key) {
                Ok(blob) => blob.as_deref().and_then(decode_cached),
                Err(_) => {
                    log::debug!("localStorage read for {} failed", self.key);
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, raw: &Value) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.set_item(&self.key, &raw.to_string()).is_err() {
                log::debug!("localStorage write for {} failed", self.key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = raw;
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(_) => {
            log::debug!("localStorage is not accessible");
            None
        }
    }
}
