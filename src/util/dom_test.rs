use super::*;
use crate::state::preferences::{Appearance, FontSize};

#[test]
fn root_attributes_use_normalized_values() {
    let record = PreferenceRecord {
        appearance: Appearance::Dark,
        font_size: FontSize::Large,
        language: "French".to_owned(),
    };
    assert_eq!(
        root_attributes(&record),
        [
            ("data-theme", "dark".to_owned()),
            ("data-font-size", "large".to_owned()),
            ("data-language", "French".to_owned()),
        ]
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn document_root_and_body_class_are_noops_but_callable() {
    DocumentRoot.present(&PreferenceRecord::default(), &serde_json::Value::Null);
    set_body_class("notification-open", true);
    set_body_class("notification-open", false);
}

#[test]
fn only_loading_ready_state_waits_for_dom_content_loaded() {
    assert!(is_still_parsing("loading"));
    assert!(!is_still_parsing("interactive"));
    assert!(!is_still_parsing("complete"));
}
