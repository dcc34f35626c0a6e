//! Widget configuration: endpoints, anchors, and timing.
//!
//! Defaults reproduce the stock SocialSync page. A page can override any field
//! by embedding a JSON document in
//! `<script type="application/json" id="socialsync-widget-config">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "socialsync-widget-config";

pub const DEFAULT_NOTIFICATIONS_ENDPOINT: &str = "/api/notifications";
pub const DEFAULT_ACCOUNT_INFO_ENDPOINT: &str = "/api/account/info";
pub const DEFAULT_SETTINGS_ENDPOINT: &str = "/api/settings";
pub const DEFAULT_CHAT_ENDPOINT: &str = "/api/ai/chat";
pub const DEFAULT_BADGE_POLL_SECS: u32 = 30;
pub const DEFAULT_HISTORY_LIMIT: usize = 10;
pub const DEFAULT_PREFERENCES_STORAGE_KEY: &str = "socialsync_user_preferences";
pub const DEFAULT_SETTINGS_PAGE: &str = "/settings";
pub const DEFAULT_AVATAR_SELECTOR: &str = ".top-nav .avatar";
pub const DEFAULT_NOTIFICATION_MENU_SELECTOR: &str = ".top-nav .menu li";
pub const DEFAULT_SIDEBAR_LIST_SELECTOR: &str = ".sidebar ul";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The override document is not valid JSON for [`WidgetConfig`].
    #[error("config parse failed: {0}")]
    Parse(String),

    /// A field parsed but holds a value the widgets cannot run with.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub notifications: String,
    pub account_info: String,
    pub settings: String,
    pub chat: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub avatar: String,
    pub notification_menu: String,
    pub sidebar_list: String,
}

/// Everything the widgets read from their host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub endpoints: Endpoints,
    pub selectors: Selectors,
    pub badge_poll_secs: u32,
    pub history_limit: usize,
    pub storage_key: String,
    pub settings_page: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints {
                notifications: DEFAULT_NOTIFICATIONS_ENDPOINT.to_owned(),
                account_info: DEFAULT_ACCOUNT_INFO_ENDPOINT.to_owned(),
                settings: DEFAULT_SETTINGS_ENDPOINT.to_owned(),
                chat: DEFAULT_CHAT_ENDPOINT.to_owned(),
            },
            selectors: Selectors {
                avatar: DEFAULT_AVATAR_SELECTOR.to_owned(),
                notification_menu: DEFAULT_NOTIFICATION_MENU_SELECTOR.to_owned(),
                sidebar_list: DEFAULT_SIDEBAR_LIST_SELECTOR.to_owned(),
            },
            badge_poll_secs: DEFAULT_BADGE_POLL_SECS,
            history_limit: DEFAULT_HISTORY_LIMIT,
            storage_key: DEFAULT_PREFERENCES_STORAGE_KEY.to_owned(),
            settings_page: DEFAULT_SETTINGS_PAGE.to_owned(),
        }
    }
}

/// Sparse override document. Absent keys keep their defaults; unknown keys
/// are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigOverrides {
    notifications_endpoint: Option<String>,
    account_info_endpoint: Option<String>,
    settings_endpoint: Option<String>,
    chat_endpoint: Option<String>,
    avatar_selector: Option<String>,
    notification_menu_selector: Option<String>,
    sidebar_list_selector: Option<String>,
    badge_poll_secs: Option<u32>,
    history_limit: Option<usize>,
    storage_key: Option<String>,
    settings_page: Option<String>,
}

impl WidgetConfig {
    /// Build config from an optional JSON override document.
    ///
    /// `None` or a blank document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for values the widgets cannot use.
    pub fn from_json(raw: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(config);
        };
        let overrides: ConfigOverrides = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;

        override_text(&mut config.endpoints.notifications, overrides.notifications_endpoint);
        override_text(&mut config.endpoints.account_info, overrides.account_info_endpoint);
        override_text(&mut config.endpoints.settings, overrides.settings_endpoint);
        override_text(&mut config.endpoints.chat, overrides.chat_endpoint);
        override_text(&mut config.selectors.avatar, overrides.avatar_selector);
        override_text(&mut config.selectors.notification_menu, overrides.notification_menu_selector);
        override_text(&mut config.selectors.sidebar_list, overrides.sidebar_list_selector);
        override_text(&mut config.storage_key, overrides.storage_key);
        override_text(&mut config.settings_page, overrides.settings_page);

        if let Some(secs) = overrides.badge_poll_secs {
            if secs == 0 {
                return Err(ConfigError::Invalid { field: "badge_poll_secs", reason: "must be positive" });
            }
            config.badge_poll_secs = secs;
        }
        if let Some(limit) = overrides.history_limit {
            if limit == 0 {
                return Err(ConfigError::Invalid { field: "history_limit", reason: "must be positive" });
            }
            config.history_limit = limit;
        }

        Ok(config)
    }

    /// Poll interval in milliseconds, as `gloo-timers` expects.
    pub fn badge_poll_millis(&self) -> u32 {
        self.badge_poll_secs.saturating_mul(1000)
    }
}

fn override_text(slot: &mut String, value: Option<String>) {
    if let Some(value) = value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
        *slot = value;
    }
}
