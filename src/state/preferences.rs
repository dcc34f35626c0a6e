//! Display preferences: normalization and cache/server sequencing.
//!
//! DESIGN
//! ======
//! Storage and the DOM sit behind [`PreferenceStore`] and
//! [`PresentationTarget`] so the boot ordering (cached first, server second,
//! write-through on success) is plain code that runs without a browser.
//!
//! The raw JSON record travels alongside the normalized one: the raw form is
//! what gets cached and what observers receive in the change event.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde_json::Value;

use crate::net::types::ApiError;

pub const DEFAULT_LANGUAGE: &str = "English";

/// Color scheme. Anything unrecognized is dark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Appearance {
    Light,
    #[default]
    Dark,
}

impl Appearance {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Base font size. Anything unrecognized is medium.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("small") => Self::Small,
            Some("large") => Self::Large,
            _ => Self::Medium,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Normalized preferences ready to be applied to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferenceRecord {
    pub appearance: Appearance,
    pub font_size: FontSize,
    pub language: String,
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self {
            appearance: Appearance::default(),
            font_size: FontSize::default(),
            language: DEFAULT_LANGUAGE.to_owned(),
        }
    }
}

impl PreferenceRecord {
    /// Normalize a raw settings object. Returns `None` for anything that is
    /// not a JSON object.
    pub fn from_raw(raw: &Value) -> Option<Self> {
        let fields = raw.as_object()?;
        let text = |key: &str| fields.get(key).and_then(Value::as_str).filter(|v| !v.is_empty());

        Some(Self {
            appearance: Appearance::from_raw(text("appearance")),
            font_size: FontSize::from_raw(text("font_size")),
            language: language_label(fields.get("language")),
        })
    }
}

/// Language as display text. Falsy values (`null`, `false`, `0`, `""`) fall
/// back to [`DEFAULT_LANGUAGE`]; other scalars are printed as-is.
fn language_label(raw: Option<&Value>) -> String {
    match raw {
        Some(Value::String(text)) if !text.is_empty() => text.clone(),
        Some(Value::Bool(true)) => "true".to_owned(),
        Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v.abs() > 0.0) => n.to_string(),
        _ => DEFAULT_LANGUAGE.to_owned(),
    }
}

/// Best-effort key-value persistence for the raw preferences record.
pub trait PreferenceStore {
    /// Cached record, or `None` when absent or unreadable.
    fn load(&self) -> Option<Value>;
    /// Persist `raw`; failures are swallowed.
    fn save(&self, raw: &Value);
}

/// Where normalized preferences end up (document attributes in the browser).
pub trait PresentationTarget {
    fn present(&self, record: &PreferenceRecord, raw: &Value);
}

/// Apply `raw` to `target`. No-op for non-object input.
pub fn apply_preferences<T>(target: &T, raw: &Value) -> Option<PreferenceRecord>
where
    T: PresentationTarget + ?Sized,
{
    let record = PreferenceRecord::from_raw(raw)?;
    target.present(&record, raw);
    Some(record)
}

/// Optimistic step: apply whatever the cache holds.
pub fn apply_cached<S, T>(store: &S, target: &T) -> Option<PreferenceRecord>
where
    S: PreferenceStore + ?Sized,
    T: PresentationTarget + ?Sized,
{
    let cached = store.load()?;
    apply_preferences(target, &cached)
}

/// Authoritative step: on success apply the server record and write it
/// through to the cache; on failure leave the optimistic state alone.
pub fn apply_authoritative<S, T>(store: &S, target: &T, fetched: Result<Value, ApiError>) -> Option<PreferenceRecord>
where
    S: PreferenceStore + ?Sized,
    T: PresentationTarget + ?Sized,
{
    let Ok(raw) = fetched else {
        return None;
    };
    let applied = apply_preferences(target, &raw);
    store.save(&raw);
    applied
}
