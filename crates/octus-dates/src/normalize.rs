//! Dispatch from a raw [`DateValue`] to a [`NormalizationResult`].

use std::ops::RangeInclusive;

use chrono::Datelike;
use tracing::{debug, trace};

use crate::calendar::{CalendarDate, NormalizationResult};
use crate::error::{UnparseableDate, UnparseableReason};
use crate::options::NormalizeOptions;
use crate::parse::{parse_iso, parse_slash, parse_text};
use crate::serial::{excel_serial_to_date, unix_timestamp_to_datetime};
use crate::value::DateValue;

/// Years that render as a plain four-digit `YYYY`.
const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

/// Normalize any accepted date representation with default options.
///
/// # Examples
///
/// ```
/// use octus_dates::normalize;
///
/// assert_eq!(normalize(45372.22928240741).iso_string().as_deref(), Some("2024-03-21"));
/// assert_eq!(normalize("15/03/2024").iso_string().as_deref(), Some("2024-03-15"));
/// assert!(!normalize("not-a-date").is_parsed());
/// ```
pub fn normalize(input: impl Into<DateValue>) -> NormalizationResult {
    normalize_with(input, &NormalizeOptions::default())
}

/// Normalize with explicit options.
pub fn normalize_with(input: impl Into<DateValue>, options: &NormalizeOptions) -> NormalizationResult {
    let value = input.into();
    let outcome = dispatch(&value, options).and_then(within_year_range);
    match &outcome {
        Ok(date) => trace!(kind = value.kind(), %date, "normalized date"),
        Err(reason) => debug!(kind = value.kind(), %reason, "unparseable date"),
    }
    outcome
        .map_err(|reason| UnparseableDate::new(value.to_string(), reason))
        .into()
}

fn dispatch(value: &DateValue, options: &NormalizeOptions) -> Result<CalendarDate, UnparseableReason> {
    match value {
        DateValue::Serial(n) if *n >= options.serial_ceiling => from_timestamp(*n),
        DateValue::Serial(n) => from_serial(*n),
        DateValue::Timestamp(n) => from_timestamp(*n),
        DateValue::IsoString(s) => parse_iso(s),
        DateValue::SlashString(s) => parse_slash(s, options.slash_order),
        DateValue::TextString(s) => parse_text(s),
        DateValue::DateTime(dt) => Ok((*dt).into()),
        DateValue::Unparseable(s) if s.trim().is_empty() => Err(UnparseableReason::Empty),
        DateValue::Unparseable(_) => Err(UnparseableReason::UnrecognizedFormat),
    }
}

fn within_year_range(date: CalendarDate) -> Result<CalendarDate, UnparseableReason> {
    if YEAR_RANGE.contains(&date.date().year()) {
        Ok(date)
    } else {
        Err(UnparseableReason::OutOfRange)
    }
}

fn from_serial(serial: f64) -> Result<CalendarDate, UnparseableReason> {
    // Day 0 and negatives predate serial 1 (1900-01-01).
    if !serial.is_finite() || serial < 1.0 {
        return Err(UnparseableReason::OutOfRange);
    }
    excel_serial_to_date(serial)
        .map(CalendarDate::from)
        .ok_or(UnparseableReason::OutOfRange)
}

fn from_timestamp(timestamp: f64) -> Result<CalendarDate, UnparseableReason> {
    unix_timestamp_to_datetime(timestamp)
        .map(CalendarDate::from)
        .ok_or(UnparseableReason::OutOfRange)
}

/// `YYYY-MM-DD` for a parseable input, `None` otherwise.
pub fn parse_date(input: impl Into<DateValue>) -> Option<String> {
    normalize(input).iso_string()
}

/// Returns true if the string names a date the normalizer accepts.
pub fn validate_date_string(value: &str) -> bool {
    normalize(value).is_parsed()
}
