//! Short timestamp labels for notification cards.
//!
//! Naive server timestamps are shown as written. Timestamps carrying an
//! offset are converted to the viewer's local time first; in the browser the
//! offset comes from `Date.prototype.getTimezoneOffset` for that instant,
//! natively it is UTC.

#[cfg(test)]
#[path = "time_label_test.rs"]
mod time_label_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Format a server timestamp as e.g. `Mar 5, 3:07 PM` in local time.
///
/// Accepts `YYYY-MM-DD HH:MM[:SS[.fff]]` with a space or `T` separator, or
/// RFC 3339. Anything else yields an empty label.
pub fn format_time_label(raw: &str) -> String {
    format_time_label_with(raw, viewer_offset)
}

/// [`format_time_label`] with an explicit local offset lookup, called with
/// the instant being labelled.
pub fn format_time_label_with(raw: &str, local_offset: impl FnOnce(OffsetDateTime) -> UtcOffset) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    let local = match parse_timestamp(raw) {
        Some(Timestamp::Instant(instant)) => {
            let shifted = instant.to_offset(local_offset(instant));
            PrimitiveDateTime::new(shifted.date(), shifted.time())
        }
        Some(Timestamp::Naive(naive)) => naive,
        None => return String::new(),
    };
    let label = format_description!("[month repr:short] [day padding:none], [hour repr:12 padding:none]:[minute] [period]");
    local.format(label).unwrap_or_default()
}

enum Timestamp {
    Instant(OffsetDateTime),
    Naive(PrimitiveDateTime),
}

fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    if let Ok(instant) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(Timestamp::Instant(instant));
    }
    let normalized = raw.replacen(' ', "T", 1);
    let naive = format_description!("[year]-[month]-[day]T[hour]:[minute][optional [:[second]]][optional [.[subsecond]]]");
    match PrimitiveDateTime::parse(&normalized, naive) {
        Ok(parsed) => Some(Timestamp::Naive(parsed)),
        Err(_) => None,
    }
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn viewer_offset(instant: OffsetDateTime) -> UtcOffset {
    let millis = (instant.unix_timestamp_nanos() / 1_000_000) as f64;
    let minutes_west = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis)).get_timezone_offset();
    UtcOffset::from_whole_seconds((-minutes_west * 60.0) as i32).unwrap_or(UtcOffset::UTC)
}

#[cfg(not(feature = "csr"))]
fn viewer_offset(_instant: OffsetDateTime) -> UtcOffset {
    UtcOffset::UTC
}
