//! Wire DTOs for the settings, notifications, account, and chat endpoints.
//!
//! DESIGN
//! ======
//! Decoding is lenient where the server is loose: absent or `null` fields
//! fall back to defaults, any `kind` other than `"message"` collapses to
//! `Post`, and malformed notification entries are dropped one by one so a
//! bad item never hides the `disabled` flag. Anything else that fails to
//! decode surfaces as [`ApiError::Decode`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::state::assistant::AssistantMessage;

/// Failure talking to one of the page endpoints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, offline).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status and no usable body.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The server answered with a non-success status and an error body.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, error: Option<String>, details: Option<String> },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

/// Closed set of notification kinds the drawer knows how to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Message,
    #[default]
    Post,
}

impl<'de> Deserialize<'de> for NotificationKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(kind) if kind == "message" => Self::Message,
            _ => Self::Post,
        })
    }
}

/// One entry in the notifications payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    #[serde(default)]
    pub kind: NotificationKind,
    #[serde(default, deserialize_with = "loose_text")]
    pub title: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub description: String,
    /// Server timestamp, typically `YYYY-MM-DD HH:MM:SS`.
    #[serde(default, deserialize_with = "loose_text")]
    pub created_at: String,
}

/// `GET /api/notifications`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NotificationsResponse {
    /// Set when the user turned in-app notifications off.
    #[serde(default, deserialize_with = "truthy")]
    pub disabled: bool,
    /// Entries that are not objects are skipped; a non-array reads as empty.
    #[serde(default, deserialize_with = "skip_bad_items")]
    pub items: Vec<NotificationItem>,
}

/// `GET /api/account/info`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// `POST /api/ai/chat` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    /// Prior turns, oldest first, excluding `message`.
    pub history: Vec<AssistantMessage>,
}

/// `POST /api/ai/chat` success body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
}

/// `POST /api/ai/chat` error body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    /// Free-form; strings pass through, other JSON values are stringified.
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl ChatErrorBody {
    /// Convert into [`ApiError::Rejected`] for `status`.
    pub fn into_rejection(self, status: u16) -> ApiError {
        let details = match self.details {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(text)) => Some(text),
            Some(other) => Some(other.to_string()),
        };
        ApiError::Rejected { status, error: non_blank(self.error), details: non_blank(details) }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Strings pass through, `null` is empty, numbers and booleans are printed.
fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other @ (Value::Number(_) | Value::Bool(_)) => other.to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// JSON truthiness: `false`, `null`, `0` and `""` are false.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(n) => n.as_f64().is_some_and(|v| v.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

fn skip_bad_items<'de, D>(deserializer: D) -> Result<Vec<NotificationItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|entry| match NotificationItem::deserialize(entry) {
            Ok(item) => Some(item),
            Err(_) => None,
        })
        .collect())
}
