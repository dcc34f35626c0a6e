//! Assistant chat state and the send/receive transitions.
//!
//! DESIGN
//! ======
//! `sending` doubles as the send button's disabled flag and as the only
//! guard on `messages`: while a request is in flight no other send can
//! start, so the history has a single writer at a time.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{ApiError, ChatReply, ChatRequest};

pub const EMPTY_REPLY_FALLBACK: &str = "Sorry, I couldn't come up with a reply.";
pub const GENERIC_ERROR_TEXT: &str = "The assistant is unavailable right now. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single chat turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantMessage {
    pub role: Role,
    pub content: String,
}

impl AssistantMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Modal state for one page view. Nothing here outlives a reload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssistantState {
    pub messages: Vec<AssistantMessage>,
    /// Current contents of the text input.
    pub draft: String,
    pub open: bool,
    pub sending: bool,
}

impl AssistantState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.open { "false" } else { "true" }
    }

    pub fn can_send(&self) -> bool {
        !self.sending && !self.draft.trim().is_empty()
    }

    /// The `limit` most recent messages, oldest first.
    pub fn history_snapshot(&self, limit: usize) -> Vec<AssistantMessage> {
        let start = self.messages.len().saturating_sub(limit);
        self.messages[start..].to_vec()
    }

    /// Start sending the current draft.
    ///
    /// Returns `None` (and changes nothing) while another send is in flight
    /// or when the draft is blank. Otherwise snapshots history *before*
    /// appending the user's message, appends it, clears the draft, and marks
    /// the state as sending.
    pub fn begin_send(&mut self, history_limit: usize) -> Option<ChatRequest> {
        if !self.can_send() {
            return None;
        }
        let message = self.draft.trim().to_owned();
        let history = self.history_snapshot(history_limit);
        self.messages.push(AssistantMessage::user(message.clone()));
        self.draft.clear();
        self.sending = true;
        Some(ChatRequest { message, history })
    }

    /// Finish the in-flight send with the server outcome. Always re-enables
    /// sending.
    pub fn finish_send(&mut self, outcome: Result<ChatReply, ApiError>) {
        let content = match outcome {
            Ok(reply) => reply_text(&reply),
            Err(err) => error_text(&err),
        };
        self.messages.push(AssistantMessage::assistant(content));
        self.sending = false;
    }
}

pub fn reply_text(reply: &ChatReply) -> String {
    reply
        .reply
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(EMPTY_REPLY_FALLBACK)
        .to_owned()
}

/// Bubble text for a failed send.
pub fn error_text(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { error: Some(error), details: Some(details), .. } => format!("{error}: {details}"),
        ApiError::Rejected { error: Some(error), details: None, .. } => error.clone(),
        ApiError::Rejected { error: None, details: Some(details), .. } => format!("{GENERIC_ERROR_TEXT} ({details})"),
        _ => GENERIC_ERROR_TEXT.to_owned(),
    }
}
