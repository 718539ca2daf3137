//! Spreadsheet serial dates and Unix timestamps.
//!
//! Spreadsheets count serial 1 as 1900-01-01 and treat 1900 as a leap
//! year, so from serial 61 (1900-03-01) on the calendar is a plain day
//! count from 1899-12-30. Serials below 60 sit one day later than that
//! count; serial 60, the phantom 1900-02-29, collapses onto 1900-02-28.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Base of the day count that is exact from serial 61 on.
pub const EXCEL_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1899, 12, 30) {
    Some(date) => date,
    None => panic!("invalid spreadsheet epoch"),
};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Serial of the phantom 1900-02-29.
const PHANTOM_LEAP_DAY: f64 = 60.0;

/// Timestamps above this many seconds are taken to be milliseconds.
pub const MILLISECOND_THRESHOLD: f64 = 10_000_000_000.0;

/// Convert a spreadsheet serial to a date/time.
///
/// The integer part is the day offset from [`EXCEL_EPOCH`] (one more for
/// serials before the phantom leap day); the fraction times 86 400,
/// truncated to whole seconds, is the time of day. Returns `None` for
/// non-finite input or results outside the calendar range.
///
/// # Examples
///
/// ```
/// use octus_dates::excel_serial_to_date;
///
/// let dt = excel_serial_to_date(45372.0).unwrap();
/// assert_eq!(dt.format("%Y-%m-%d").to_string(), "2024-03-21");
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let days = serial.trunc();
    let seconds = ((serial - days) * SECONDS_PER_DAY).trunc();
    let offset = if (0.0..PHANTOM_LEAP_DAY).contains(&days) {
        days + 1.0
    } else {
        days
    };

    EXCEL_EPOCH
        .and_time(NaiveTime::MIN)
        .checked_add_signed(TimeDelta::try_days(offset as i64)?)?
        .checked_add_signed(TimeDelta::try_seconds(seconds as i64)?)
}

/// Spreadsheet serial (whole days) for a date. Inverse of the integer part
/// of [`excel_serial_to_date`].
pub fn date_to_excel_serial(date: NaiveDate) -> i64 {
    let days = (date - EXCEL_EPOCH).num_days();
    // 1900-02-28 and earlier: undo the phantom leap day shift.
    if (1..=60).contains(&days) { days - 1 } else { days }
}

/// Convert a Unix timestamp to a UTC date/time.
///
/// Values above [`MILLISECOND_THRESHOLD`] are milliseconds, anything else
/// seconds with an optional fraction.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unix_timestamp_to_datetime(timestamp: f64) -> Option<NaiveDateTime> {
    if !timestamp.is_finite() {
        return None;
    }
    let converted = if timestamp.abs() > MILLISECOND_THRESHOLD {
        DateTime::from_timestamp_millis(timestamp.trunc() as i64)
    } else {
        // Floor keeps the fraction non-negative for times before 1970.
        let secs = timestamp.floor();
        let nanos = ((timestamp - secs) * 1e9).trunc() as u32;
        DateTime::from_timestamp(secs as i64, nanos)
    };
    converted.map(|dt| dt.naive_utc())
}
