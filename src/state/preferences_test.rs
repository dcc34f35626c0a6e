use std::cell::RefCell;

use serde_json::json;

use super::*;

#[derive(Default)]
struct MemoryStore {
    value: RefCell<Option<Value>>,
    saves: RefCell<usize>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<Value> {
        self.value.borrow().clone()
    }

    fn save(&self, raw: &Value) {
        *self.value.borrow_mut() = Some(raw.clone());
        *self.saves.borrow_mut() += 1;
    }
}

#[derive(Default)]
struct RecordingTarget {
    applied: RefCell<Vec<(PreferenceRecord, Value)>>,
}

impl RecordingTarget {
    fn last(&self) -> Option<PreferenceRecord> {
        self.applied.borrow().last().map(|(record, _)| record.clone())
    }
}

impl PresentationTarget for RecordingTarget {
    fn present(&self, record: &PreferenceRecord, raw: &Value) {
        self.applied.borrow_mut().push((record.clone(), raw.clone()));
    }
}

// =============================================================
// Normalization
// =============================================================

#[test]
fn appearance_unknown_values_default_to_dark() {
    for raw in [None, Some(""), Some("sepia"), Some("DARK"), Some("lightish"), Some(" light")] {
        assert_eq!(Appearance::from_raw(raw), Appearance::Dark, "input {raw:?}");
    }
}

#[test]
fn appearance_light_is_case_insensitive() {
    for raw in ["light", "Light", "LIGHT"] {
        assert_eq!(Appearance::from_raw(Some(raw)), Appearance::Light);
    }
}

#[test]
fn font_size_unknown_values_default_to_medium() {
    for raw in [None, Some(""), Some("huge"), Some("12px"), Some("x-large")] {
        assert_eq!(FontSize::from_raw(raw), FontSize::Medium, "input {raw:?}");
    }
}

#[test]
fn font_size_recognized_values_are_case_insensitive() {
    assert_eq!(FontSize::from_raw(Some("Small")), FontSize::Small);
    assert_eq!(FontSize::from_raw(Some("LARGE")), FontSize::Large);
    assert_eq!(FontSize::from_raw(Some("medium")), FontSize::Medium);
}

#[test]
fn record_from_raw_rejects_non_objects() {
    assert_eq!(PreferenceRecord::from_raw(&Value::Null), None);
    assert_eq!(PreferenceRecord::from_raw(&json!("dark")), None);
    assert_eq!(PreferenceRecord::from_raw(&json!([1, 2])), None);
}

#[test]
fn record_from_raw_fills_defaults() {
    let record = PreferenceRecord::from_raw(&json!({})).unwrap();
    assert_eq!(record, PreferenceRecord::default());
    assert_eq!(record.language, "English");
}

#[test]
fn record_from_raw_ignores_non_string_fields() {
    let record = PreferenceRecord::from_raw(&json!({"appearance": 1, "font_size": true, "language": null})).unwrap();
    assert_eq!(record, PreferenceRecord::default());
}

#[test]
fn scalar_language_is_kept_as_text() {
    let numeric = PreferenceRecord::from_raw(&json!({"language": 42})).unwrap();
    let flag = PreferenceRecord::from_raw(&json!({"language": true})).unwrap();
    assert_eq!(numeric.language, "42");
    assert_eq!(flag.language, "true");
}

#[test]
fn falsy_language_falls_back_to_english() {
    for raw in [json!({"language": ""}), json!({"language": 0}), json!({"language": false}), json!({"language": null})] {
        assert_eq!(PreferenceRecord::from_raw(&raw).unwrap().language, "English", "{raw}");
    }
}

// =============================================================
// Apply / cache sequencing
// =============================================================

#[test]
fn apply_preferences_is_noop_for_null_input() {
    let target = RecordingTarget::default();
    assert_eq!(apply_preferences(&target, &Value::Null), None);
    assert!(target.applied.borrow().is_empty());
}

#[test]
fn apply_preferences_passes_raw_record_through() {
    let target = RecordingTarget::default();
    let raw = json!({"appearance": "LIGHT", "font_size": "Small", "language": "German", "extra": 7});
    apply_preferences(&target, &raw);
    let applied = target.applied.borrow();
    assert_eq!(applied[0].0.appearance, Appearance::Light);
    assert_eq!(applied[0].1, raw);
}

#[test]
fn apply_cached_does_nothing_without_cache() {
    let store = MemoryStore::default();
    let target = RecordingTarget::default();
    assert_eq!(apply_cached(&store, &target), None);
    assert!(target.applied.borrow().is_empty());
}

#[test]
fn cached_then_server_ends_in_server_state_and_writes_back() {
    let store = MemoryStore::default();
    *store.value.borrow_mut() = Some(json!({"appearance": "light"}));
    let target = RecordingTarget::default();

    let optimistic = apply_cached(&store, &target).unwrap();
    assert_eq!(optimistic.appearance, Appearance::Light);

    let server = json!({"appearance": "dark", "font_size": "large", "language": "French"});
    let authoritative = apply_authoritative(&store, &target, Ok(server.clone())).unwrap();

    assert_eq!(authoritative.appearance.as_str(), "dark");
    assert_eq!(authoritative.font_size.as_str(), "large");
    assert_eq!(authoritative.language, "French");
    assert_eq!(target.last(), Some(authoritative));
    assert_eq!(target.applied.borrow().len(), 2);
    assert_eq!(store.load(), Some(server));
}

#[test]
fn server_failure_keeps_optimistic_state_and_cache() {
    let store = MemoryStore::default();
    let cached = json!({"appearance": "light", "font_size": "small"});
    *store.value.borrow_mut() = Some(cached.clone());
    let target = RecordingTarget::default();

    apply_cached(&store, &target);
    let result = apply_authoritative(&store, &target, Err(ApiError::Status(401)));

    assert_eq!(result, None);
    assert_eq!(target.applied.borrow().len(), 1);
    assert_eq!(target.last().map(|r| r.font_size), Some(FontSize::Small));
    assert_eq!(store.load(), Some(cached));
    assert_eq!(*store.saves.borrow(), 0);
}
