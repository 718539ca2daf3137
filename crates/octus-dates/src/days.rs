//! Calendar-day distance to a target date.

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::normalize::normalize_with;
use crate::options::NormalizeOptions;
use crate::value::DateValue;

/// Number of calendar days from `reference` to `target`.
///
/// Both sides are truncated to midnight first, so any time of day is
/// ignored. Negative when the target lies in the past. `reference`
/// defaults to the local current date. Returns `None` when the target
/// cannot be parsed.
///
/// ```
/// use chrono::NaiveDate;
/// use octus_dates::days_until_date;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(18, 0, 0);
/// assert_eq!(days_until_date("2024-03-21", today), Some(6));
/// assert_eq!(days_until_date("03/10/2024", today), Some(-5));
/// assert_eq!(days_until_date("nope", today), None);
/// ```
pub fn days_until_date(
    target: impl Into<DateValue>,
    reference: Option<NaiveDateTime>,
) -> Option<i64> {
    days_until_date_with(target, reference, &NormalizeOptions::default())
}

/// Like [`days_until_date`], parsing the target with explicit options.
pub fn days_until_date_with(
    target: impl Into<DateValue>,
    reference: Option<NaiveDateTime>,
    options: &NormalizeOptions,
) -> Option<i64> {
    let target = normalize_with(target, options).into_option()?;
    let start = reference.map_or_else(|| Local::now().date_naive(), |dt| dt.date());
    Some(days_between(start, target.date()))
}

/// Signed day count from `start` to `end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}
