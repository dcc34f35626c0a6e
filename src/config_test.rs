use super::*;

#[test]
fn from_json_none_yields_defaults() {
    let cfg = WidgetConfig::from_json(None).unwrap();
    assert_eq!(cfg, WidgetConfig::default());
    assert_eq!(cfg.endpoints.notifications, DEFAULT_NOTIFICATIONS_ENDPOINT);
    assert_eq!(cfg.badge_poll_secs, 30);
    assert_eq!(cfg.history_limit, 10);
    assert_eq!(cfg.storage_key, "socialsync_user_preferences");
}

#[test]
fn from_json_blank_document_yields_defaults() {
    assert_eq!(WidgetConfig::from_json(Some("   \n")).unwrap(), WidgetConfig::default());
}

#[test]
fn from_json_applies_overrides_and_ignores_unknown_keys() {
    let raw = r#"{
        "chat_endpoint": "/v2/ai/chat",
        "badge_poll_secs": 5,
        "sidebar_list_selector": "nav.side ul",
        "unknown_key": true
    }"#;
    let cfg = WidgetConfig::from_json(Some(raw)).unwrap();
    assert_eq!(cfg.endpoints.chat, "/v2/ai/chat");
    assert_eq!(cfg.endpoints.settings, DEFAULT_SETTINGS_ENDPOINT);
    assert_eq!(cfg.badge_poll_secs, 5);
    assert_eq!(cfg.selectors.sidebar_list, "nav.side ul");
}

#[test]
fn from_json_blank_strings_keep_defaults() {
    let cfg = WidgetConfig::from_json(Some(r#"{"storage_key": "  "}"#)).unwrap();
    assert_eq!(cfg.storage_key, DEFAULT_PREFERENCES_STORAGE_KEY);
}

#[test]
fn from_json_rejects_zero_poll_interval() {
    let err = WidgetConfig::from_json(Some(r#"{"badge_poll_secs": 0}"#)).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { field: "badge_poll_secs", reason: "must be positive" });
}

#[test]
fn from_json_rejects_zero_history_limit() {
    let err = WidgetConfig::from_json(Some(r#"{"history_limit": 0}"#)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "history_limit", .. }));
}

#[test]
fn from_json_reports_malformed_documents() {
    let err = WidgetConfig::from_json(Some("{not json")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("config parse failed:"));
}

#[test]
fn badge_poll_millis_scales_seconds() {
    assert_eq!(WidgetConfig::default().badge_poll_millis(), 30_000);
}
