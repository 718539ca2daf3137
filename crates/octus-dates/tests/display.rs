//! Tests for display formatting and day counts.

use chrono::{NaiveDate, NaiveDateTime};
use octus_dates::{
    DEFAULT_PLACEHOLDER, NormalizeOptions, SlashOrder, days_between, days_until_date,
    days_until_date_with, format_date_for_display, format_date_for_display_with,
};

fn at(year: i32, month: u32, day: u32, hour: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(hour, 0, 0))
}

// =========================================================================
// Display
// =========================================================================

#[test]
fn test_display_from_serial() {
    assert_eq!(format_date_for_display(45_372), "Mar 21, 2024");
    assert_eq!(format_date_for_display(45_372.229_282_407_41), "Mar 21, 2024");
}

#[test]
fn test_display_pads_day() {
    assert_eq!(format_date_for_display("2024-01-05"), "Jan 05, 2024");
    assert_eq!(format_date_for_display("15/03/2024"), "Mar 15, 2024");
}

#[test]
fn test_display_placeholder() {
    assert_eq!(format_date_for_display("invalid"), DEFAULT_PLACEHOLDER);
    assert_eq!(format_date_for_display(None::<&str>), "Not set");
    assert_eq!(format_date_for_display(""), "Not set");
}

#[test]
fn test_display_custom_placeholder() {
    let options = NormalizeOptions::new().with_placeholder("TBD");
    assert_eq!(format_date_for_display_with("13/13/2024", &options), "TBD");
    assert_eq!(
        format_date_for_display_with("2024-03-21", &options),
        "Mar 21, 2024"
    );
}

#[test]
fn test_display_output_parses_back() {
    let shown = format_date_for_display("2024-03-21T08:00:00Z");
    assert_eq!(format_date_for_display(shown.as_str()), shown);
}

// =========================================================================
// Day counts
// =========================================================================

#[test]
fn test_days_until_future() {
    assert_eq!(days_until_date("2024-03-21", at(2024, 3, 15, 23)), Some(6));
    assert_eq!(days_until_date(45_372, at(2024, 3, 15, 0)), Some(6));
}

#[test]
fn test_days_until_same_day_ignores_time() {
    assert_eq!(
        days_until_date("2024-03-15T00:00:01", at(2024, 3, 15, 23)),
        Some(0)
    );
}

#[test]
fn test_days_until_past_is_negative() {
    let days = days_until_date("03/01/2024", at(2024, 3, 15, 12)).unwrap();
    assert!(days < 0);
    assert_eq!(days, -14);
}

#[test]
fn test_days_until_across_leap_day() {
    assert_eq!(days_until_date("2024-03-01", at(2024, 2, 28, 9)), Some(2));
    assert_eq!(days_until_date("2023-03-01", at(2023, 2, 28, 9)), Some(1));
}

#[test]
fn test_days_until_unparseable() {
    assert_eq!(days_until_date("not-a-date", at(2024, 3, 15, 0)), None);
    assert_eq!(days_until_date(None::<&str>, None), None);
}

#[test]
fn test_days_until_defaults_to_today() {
    let today = chrono::Local::now().date_naive();
    let target = today.format("%Y-%m-%d").to_string();
    // A midnight rollover between the two clock reads moves the count by one.
    let days = days_until_date(target.as_str(), None).unwrap();
    assert!((-1..=0).contains(&days));
}

#[test]
fn test_days_until_with_options() {
    let day_first = NormalizeOptions::new().with_slash_order(SlashOrder::DayFirst);
    let reference = at(2024, 3, 1, 12);
    assert_eq!(days_until_date("03/04/2024", reference), Some(3));
    assert_eq!(days_until_date_with("03/04/2024", reference, &day_first), Some(33));

    let low_ceiling = NormalizeOptions::new().with_serial_ceiling(40_000.0);
    assert_eq!(days_until_date_with(45_372, reference, &low_ceiling), Some(-19_783));
}

#[test]
fn test_days_between() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    assert_eq!(days_between(start, end), 365);
    assert_eq!(days_between(end, start), -365);
}
