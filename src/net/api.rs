//! REST helpers for the endpoints the page widgets consume.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): stubs returning [`ApiError::Transport`]
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Widgets decide the fallback UI;
//! nothing here retries or panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AccountInfo, ApiError, ChatReply, ChatRequest, NotificationsResponse};
#[cfg(any(test, feature = "csr"))]
use super::types::ChatErrorBody;
#[cfg(feature = "csr")]
use serde::de::DeserializeOwned;

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}

/// Map a failed chat response body to the most specific error available.
#[cfg(any(test, feature = "csr"))]
fn chat_rejection(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ChatErrorBody>(body) {
        Ok(parsed) if parsed.error.is_some() || parsed.details.is_some() => parsed.into_rejection(status),
        _ => ApiError::Status(status),
    }
}

#[cfg(feature = "csr")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the notification list (`GET /api/notifications`).
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-success status, or an
/// undecodable body.
pub async fn fetch_notifications(endpoint: &str) -> Result<NotificationsResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(endpoint).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        Err(unavailable())
    }
}

/// Fetch account details for the avatar (`GET /api/account/info`).
///
/// # Errors
///
/// Same failure modes as [`fetch_notifications`].
pub async fn fetch_account_info(endpoint: &str) -> Result<AccountInfo, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(endpoint).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        Err(unavailable())
    }
}

/// Fetch the authoritative display settings (`GET /api/settings`).
///
/// The record is returned raw; normalization happens in
/// [`crate::state::preferences`].
///
/// # Errors
///
/// Same failure modes as [`fetch_notifications`].
pub async fn fetch_settings(endpoint: &str) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(endpoint).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        Err(unavailable())
    }
}

/// Send one assistant turn (`POST /api/ai/chat`).
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] when the server explains the failure in an
/// `{error, details}` body, otherwise the generic transport/status/decode
/// variants.
pub async fn send_chat(endpoint: &str, request: &ChatRequest) -> Result<ChatReply, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(chat_rejection(status, &body));
        }
        resp.json::<ChatReply>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, request);
        Err(unavailable())
    }
}
