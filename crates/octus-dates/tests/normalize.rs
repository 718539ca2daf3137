//! Tests for date normalization across every accepted representation.

use chrono::{NaiveDate, Timelike};
use octus_dates::{
    CalendarDate, DateValue, NormalizationResult, NormalizeOptions, SlashOrder,
    UnparseableReason, normalize, normalize_with, parse_date, validate_date_string,
};

fn iso(input: impl Into<DateValue>) -> Option<String> {
    normalize(input).iso_string()
}

fn reason(input: impl Into<DateValue>) -> Option<UnparseableReason> {
    normalize(input).error().map(|err| err.reason)
}

// =========================================================================
// Spreadsheet serials
// =========================================================================

#[test]
fn test_serial_with_time_fraction() {
    let result = normalize(45_372.229_282_407_41);
    assert_eq!(result.iso_string().as_deref(), Some("2024-03-21"));

    let time = result.date().and_then(CalendarDate::time).unwrap();
    assert_eq!(time.hour(), 5);
    assert_eq!(time.minute(), 30);
}

#[test]
fn test_serial_neighbours() {
    assert_eq!(iso(45_371.229_282_407_41).as_deref(), Some("2024-03-20"));
    assert_eq!(iso(45_373.229_282_407_41).as_deref(), Some("2024-03-22"));
}

#[test]
fn test_serial_reference_points() {
    assert_eq!(iso(1).as_deref(), Some("1900-01-01"));
    assert_eq!(iso(61).as_deref(), Some("1900-03-01"));
    assert_eq!(iso(45_292).as_deref(), Some("2024-01-01"));
    assert_eq!(iso(45_372).as_deref(), Some("2024-03-21"));
    assert_eq!(iso(45_383).as_deref(), Some("2024-04-01"));
}

#[test]
fn test_serial_out_of_range() {
    assert_eq!(reason(0), Some(UnparseableReason::OutOfRange));
    assert_eq!(reason(-12.5), Some(UnparseableReason::OutOfRange));
    assert_eq!(reason(f64::NAN), Some(UnparseableReason::OutOfRange));
    assert_eq!(reason(f64::NEG_INFINITY), Some(UnparseableReason::OutOfRange));
    assert_eq!(reason(1e300), Some(UnparseableReason::OutOfRange));
}

#[test]
fn test_large_numbers_are_timestamps() {
    assert_eq!(iso(1_710_979_200_i64).as_deref(), Some("2024-03-21"));
    assert_eq!(iso(1_710_979_200_000_i64).as_deref(), Some("2024-03-21"));
    assert_eq!(
        iso(DateValue::Timestamp(0.0)).as_deref(),
        Some("1970-01-01")
    );
}

#[test]
fn test_serial_ceiling_is_configurable() {
    let options = NormalizeOptions::new().with_serial_ceiling(50_000.0);
    let result = normalize_with(60_000, &options);
    assert_eq!(result.iso_string().as_deref(), Some("1970-01-01"));

    let result = normalize_with(45_372, &options);
    assert_eq!(result.iso_string().as_deref(), Some("2024-03-21"));
}

#[test]
fn test_day_zero_fractions_are_out_of_range() {
    assert_eq!(reason(0.5), Some(UnparseableReason::OutOfRange));
    assert_eq!(reason(0.999), Some(UnparseableReason::OutOfRange));
    assert_eq!(iso(1.25).as_deref(), Some("1900-01-01"));
}

#[test]
fn test_negative_fractional_timestamp_keeps_the_day() {
    assert_eq!(
        iso(DateValue::Timestamp(-86_400.5)).as_deref(),
        Some("1969-12-30")
    );
    assert_eq!(
        iso(DateValue::Timestamp(-0.25)).as_deref(),
        Some("1969-12-31")
    );
}

#[test]
fn test_years_outside_four_digits_are_out_of_range() {
    assert_eq!(reason(3e14), Some(UnparseableReason::OutOfRange));
    assert_eq!(reason("21 Mar -5"), Some(UnparseableReason::OutOfRange));
    assert_eq!(reason("0000-01-01"), Some(UnparseableReason::OutOfRange));
    assert_eq!(reason("01/01/0000"), Some(UnparseableReason::OutOfRange));

    let options = NormalizeOptions::new().with_serial_ceiling(1e9);
    let result = normalize_with(3e6, &options);
    assert_eq!(result.error().map(|err| err.reason), Some(UnparseableReason::OutOfRange));

    assert_eq!(iso("0001-01-01").as_deref(), Some("0001-01-01"));
    assert_eq!(iso("9999-12-31").as_deref(), Some("9999-12-31"));
}

// =========================================================================
// ISO strings
// =========================================================================

#[test]
fn test_iso_date_is_unchanged() {
    assert_eq!(iso("2024-03-15").as_deref(), Some("2024-03-15"));
    assert_eq!(iso("2024-02-29").as_deref(), Some("2024-02-29"));
}

#[test]
fn test_iso_datetime_drops_time() {
    assert_eq!(iso("2024-03-15T10:30:00").as_deref(), Some("2024-03-15"));
    assert_eq!(iso("2024-03-15T10:30:00Z").as_deref(), Some("2024-03-15"));
    assert_eq!(iso("2024-03-15T10:30:00.123456").as_deref(), Some("2024-03-15"));
    assert_eq!(iso("2024-03-15 10:30:00").as_deref(), Some("2024-03-15"));
}

#[test]
fn test_utc_designator_does_not_shift_date() {
    let result = normalize("2024-03-15T23:59:59Z");
    assert_eq!(result.iso_string().as_deref(), Some("2024-03-15"));
    let time = result.date().and_then(CalendarDate::time).unwrap();
    assert_eq!(time.hour(), 23);
}

#[test]
fn test_iso_invalid_calendar_dates() {
    assert_eq!(reason("2024-13-01"), Some(UnparseableReason::InvalidCalendarDate));
    assert_eq!(reason("2023-02-29"), Some(UnparseableReason::InvalidCalendarDate));
    assert_eq!(reason("2024-04-31"), Some(UnparseableReason::InvalidCalendarDate));
}

// =========================================================================
// Slash strings
// =========================================================================

#[test]
fn test_us_order() {
    assert_eq!(iso("03/15/2024").as_deref(), Some("2024-03-15"));
    assert_eq!(iso("12/31/2024").as_deref(), Some("2024-12-31"));
}

#[test]
fn test_eu_order_when_first_group_exceeds_twelve() {
    assert_eq!(iso("15/03/2024").as_deref(), Some("2024-03-15"));
    assert_eq!(iso("31/12/2024").as_deref(), Some("2024-12-31"));
}

#[test]
fn test_first_twelve_days_stay_ambiguous() {
    // 5 April in EU order reads as 4 May in US order.
    assert_eq!(iso("05/04/2024").as_deref(), Some("2024-05-04"));
    let options = NormalizeOptions::new().with_slash_order(SlashOrder::DayFirst);
    assert_eq!(
        normalize_with("05/04/2024", &options).iso_string().as_deref(),
        Some("2024-04-05")
    );
}

#[test]
fn test_year_first_slash() {
    assert_eq!(iso("2024/03/15").as_deref(), Some("2024-03-15"));
}

#[test]
fn test_slash_rejections() {
    assert_eq!(reason("02/30/2024"), Some(UnparseableReason::InvalidCalendarDate));
    assert_eq!(reason("1/2/3/2024"), Some(UnparseableReason::UnrecognizedFormat));
    assert_eq!(reason("03/15/24"), Some(UnparseableReason::UnrecognizedFormat));
}

// =========================================================================
// Other input
// =========================================================================

#[test]
fn test_named_month_text() {
    assert_eq!(iso("Mar 15, 2024").as_deref(), Some("2024-03-15"));
    assert_eq!(iso("15-Mar-2024").as_deref(), Some("2024-03-15"));
    assert_eq!(iso("15 March 2024").as_deref(), Some("2024-03-15"));
}

#[test]
fn test_typed_dates() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    assert_eq!(iso(date).as_deref(), Some("2024-03-15"));
    assert_eq!(iso(date.and_hms_opt(8, 0, 0).unwrap()).as_deref(), Some("2024-03-15"));
}

#[test]
fn test_unparseable_is_a_value() {
    let result = normalize("not-a-date");
    assert!(!result.is_parsed());
    let NormalizationResult::Unparseable(err) = result else {
        panic!("expected unparseable marker");
    };
    assert_eq!(err.input, "not-a-date");
    assert_eq!(err.reason, UnparseableReason::UnrecognizedFormat);
    assert_eq!(
        err.to_string(),
        "could not parse date 'not-a-date': unrecognized format"
    );
}

#[test]
fn test_empty_inputs() {
    assert_eq!(reason(""), Some(UnparseableReason::Empty));
    assert_eq!(reason("   "), Some(UnparseableReason::Empty));
    assert_eq!(reason(None::<&str>), Some(UnparseableReason::Empty));
    assert_eq!(reason("12345"), Some(UnparseableReason::UnrecognizedFormat));
}

#[test]
fn test_parse_date_and_validate() {
    assert_eq!(parse_date("2024-03-15T10:30:00Z").as_deref(), Some("2024-03-15"));
    assert_eq!(parse_date("invalid"), None);
    assert!(validate_date_string("15/03/2024"));
    assert!(!validate_date_string(""));
}

#[test]
fn test_calendar_date_from_str() {
    let date: CalendarDate = "03/15/2024".parse().unwrap();
    assert_eq!(date.to_string(), "2024-03-15");
    assert!("2024-13-01".parse::<CalendarDate>().is_err());
}
