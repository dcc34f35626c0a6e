use super::*;
use time::macros::offset;

#[test]
fn formats_space_separated_server_timestamps() {
    assert_eq!(format_time_label("2024-03-05 15:07:00"), "Mar 5, 3:07 PM");
}

#[test]
fn formats_t_separated_and_fractional_timestamps() {
    assert_eq!(format_time_label("2024-12-25T09:30:15.123456"), "Dec 25, 9:30 AM");
}

#[test]
fn formats_timestamps_without_seconds() {
    assert_eq!(format_time_label("2024-07-01 00:05"), "Jul 1, 12:05 AM");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_builds_label_offset_timestamps_in_utc() {
    assert_eq!(format_time_label("2024-03-05T15:07:00+02:00"), "Mar 5, 1:07 PM");
    assert_eq!(format_time_label("2024-03-05T12:00:00Z"), "Mar 5, 12:00 PM");
}

#[test]
fn offset_timestamps_shift_into_viewer_time() {
    assert_eq!(format_time_label_with("2024-03-05T12:00:00Z", |_| offset!(-5)), "Mar 5, 7:00 AM");
    assert_eq!(format_time_label_with("2024-03-05T23:30:00Z", |_| offset!(+2)), "Mar 6, 1:30 AM");
}

#[test]
fn offset_lookup_sees_the_labelled_instant() {
    let label = format_time_label_with("2024-03-05T12:00:00+01:00", |instant| {
        assert_eq!(instant.unix_timestamp(), 1_709_636_400);
        UtcOffset::UTC
    });
    assert_eq!(label, "Mar 5, 11:00 AM");
}

#[test]
fn naive_timestamps_ignore_viewer_offset() {
    assert_eq!(format_time_label_with("2024-03-05 15:07:00", |_| offset!(+9)), "Mar 5, 3:07 PM");
}

#[test]
fn empty_and_garbage_yield_empty_label() {
    assert_eq!(format_time_label(""), "");
    assert_eq!(format_time_label("   "), "");
    assert_eq!(format_time_label("yesterday"), "");
    assert_eq!(format_time_label("2024-13-45 99:99:99"), "");
}
