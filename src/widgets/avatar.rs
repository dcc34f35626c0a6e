//! Nav avatar synchronization with the account's profile image.
//!
//! Frame styling and the click-through to the settings page are applied
//! synchronously; the image itself arrives with the account info request.
//! Any failure leaves the avatars styled but without a background image.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlImageElement};

use crate::config::WidgetConfig;
use crate::net::api;
use crate::util::avatar::{AVATAR_FRAME_STYLE, AVATAR_IMAGE_STYLE, background_style, normalize_avatar_url};
use crate::util::dom::document;
use crate::util::listener::EventBinding;
use crate::widgets::anchors;

/// Click bindings for the avatars found at load time.
pub struct AvatarSync {
    _bindings: Vec<EventBinding>,
}

impl AvatarSync {
    /// Style every avatar, bind navigation, and start the image fetch.
    ///
    /// # Errors
    ///
    /// Returns the DOM exception if a click listener cannot be registered.
    pub fn load(document: &Document, config: &WidgetConfig) -> Result<Self, JsValue> {
        let avatars = anchors::query_all(document, &config.selectors.avatar);
        let mut bindings = Vec::with_capacity(avatars.len());
        for avatar in &avatars {
            apply_style(avatar, AVATAR_FRAME_STYLE.iter().copied());
            let target = config.settings_page.clone();
            bindings.push(EventBinding::bind(avatar, "click", move |_| navigate(&target))?);
        }

        if avatars.is_empty() {
            log::debug!("no avatars to synchronize");
        } else {
            let endpoint = config.endpoints.account_info.clone();
            let selector = config.selectors.avatar.clone();
            leptos::task::spawn_local(async move {
                let url = match api::fetch_account_info(&endpoint).await {
                    Ok(info) => normalize_avatar_url(info.profile_image.as_deref().unwrap_or_default()),
                    Err(err) => {
                        log::warn!("account info unavailable: {err}");
                        String::new()
                    }
                };
                apply_image(&selector, &url);
            });
        }

        Ok(Self { _bindings: bindings })
    }
}

/// Re-query the avatars and show `url`, or clear the background when empty.
fn apply_image(selector: &str, url: &str) {
    let Some(document) = document() else {
        return;
    };
    for avatar in anchors::query_all(&document, selector) {
        if let Some(img) = avatar.dyn_ref::<HtmlImageElement>() {
            if !url.is_empty() {
                img.set_src(url);
                apply_style(&avatar, AVATAR_IMAGE_STYLE.iter().copied());
            }
        } else if url.is_empty() {
            if avatar.style().remove_property("background-image").is_err() {
                log::debug!("could not clear avatar background");
            }
        } else {
            let styles = background_style(url);
            apply_style(&avatar, styles.iter().map(|(name, value)| (*name, value.as_str())));
        }
    }
}

fn apply_style<'a>(element: &HtmlElement, styles: impl IntoIterator<Item = (&'a str, &'a str)>) {
    let style = element.style();
    for (name, value) in styles {
        if style.set_property(name, value).is_err() {
            log::debug!("could not set avatar style {name}");
        }
    }
}

fn navigate(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_href(href).is_err() {
        log::warn!("navigation to {href} failed");
    }
}
