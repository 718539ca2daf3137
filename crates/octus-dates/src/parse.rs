//! Text layouts accepted by the normalizer.
//!
//! Each parser takes input already classified by [`crate::DateValue`] and
//! either produces a [`CalendarDate`] or the reason it could not.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::calendar::CalendarDate;
use crate::error::UnparseableReason;
use crate::options::SlashOrder;

pub type ParseResult = Result<CalendarDate, UnparseableReason>;

/// Time-of-day layouts, most precise first.
const TIME_FORMATS: [&str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

/// Named-month and dotted layouts, tried in order.
const TEXT_DATE_FORMATS: [&str; 7] = [
    "%b %d, %Y", // Mar 21, 2024
    "%B %d, %Y", // March 21, 2024
    "%d %b %Y",  // 21 Mar 2024
    "%d %B %Y",  // 21 March 2024
    "%d-%b-%Y",  // 21-Mar-2024
    "%d-%B-%Y",  // 21-March-2024
    "%d.%m.%Y",  // 21.03.2024
];

const TEXT_DATETIME_FORMATS: [&str; 3] = [
    "%d-%b-%Y %H:%M:%S", // 21-Mar-2024 05:30:10
    "%d-%b-%Y %H:%M",
    "%d.%m.%Y %H:%M",
];

/// Parse `YYYY-MM-DD` with an optional `T`/space separated time.
///
/// A trailing `Z` or numeric offset is accepted and dropped; the value is
/// kept as naive local time.
pub fn parse_iso(value: &str) -> ParseResult {
    let Some(date_part) = value.get(..10) else {
        return Err(UnparseableReason::UnrecognizedFormat);
    };
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| UnparseableReason::InvalidCalendarDate)?;

    let rest = &value[10..];
    if rest.is_empty() {
        return Ok(CalendarDate::new(date));
    }

    let Some(time_part) = rest.strip_prefix(['T', 't', ' ']) else {
        return Err(UnparseableReason::UnrecognizedFormat);
    };
    let time = parse_time(strip_zone(time_part))?;
    Ok(CalendarDate::with_time(date, time))
}

/// Drop a trailing `Z`, `+HH:MM`, `-HHMM` or `+HH` designator.
fn strip_zone(time: &str) -> &str {
    if let Some(stripped) = time.strip_suffix(['Z', 'z']) {
        return stripped;
    }
    // The sign cannot sit inside HH:MM, so only look past the first five chars.
    match time.get(5..).and_then(|tail| tail.rfind(['+', '-'])) {
        Some(pos) => {
            let split = pos + 5;
            let offset = &time[split + 1..];
            let digits: String = offset.chars().filter(|c| *c != ':').collect();
            if matches!(digits.len(), 2 | 4) && digits.chars().all(|c| c.is_ascii_digit()) {
                &time[..split]
            } else {
                time
            }
        }
        None => time,
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, UnparseableReason> {
    for fmt in &TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(value, fmt) {
            return Ok(time);
        }
    }
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit() || c == ':' || c == '.') {
        Err(UnparseableReason::InvalidCalendarDate)
    } else {
        Err(UnparseableReason::UnrecognizedFormat)
    }
}

/// Parse a slash-delimited date, optionally followed by ` HH:MM[:SS]`.
///
/// A four-digit first group reads as `YYYY/MM/DD`. Otherwise the year is
/// last and `order` decides between `MM/DD/YYYY` and `DD/MM/YYYY`. Under
/// [`SlashOrder::Heuristic`] a first group above 12 cannot be a month, so
/// it is read as a day; anything from 1 to 12 reads as US order. That
/// leaves the first twelve days of every month ambiguous: `03/04/2024` is
/// always March 4th, never April 3rd.
pub fn parse_slash(value: &str, order: SlashOrder) -> ParseResult {
    let (date_part, time_part) = match value.split_once(' ') {
        Some((date, time)) => (date, Some(time.trim())),
        None => (value, None),
    };

    let groups: Vec<&str> = date_part.split('/').collect();
    let [first, second, third] = groups.as_slice() else {
        return Err(UnparseableReason::UnrecognizedFormat);
    };
    if !groups
        .iter()
        .all(|g| !g.is_empty() && g.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(UnparseableReason::UnrecognizedFormat);
    }

    let (year, month, day) = if first.len() == 4 {
        if second.len() > 2 || third.len() > 2 {
            return Err(UnparseableReason::UnrecognizedFormat);
        }
        (*first, *second, *third)
    } else {
        if third.len() != 4 || first.len() > 2 || second.len() > 2 {
            return Err(UnparseableReason::UnrecognizedFormat);
        }
        let leading: u32 = first
            .parse()
            .map_err(|_| UnparseableReason::UnrecognizedFormat)?;
        let day_first = match order {
            SlashOrder::Heuristic => leading > 12,
            SlashOrder::MonthFirst => false,
            SlashOrder::DayFirst => true,
        };
        if day_first {
            (*third, *second, *first)
        } else {
            (*third, *first, *second)
        }
    };

    let date = ymd(year, month, day)?;
    match time_part {
        Some(time) => Ok(CalendarDate::with_time(date, parse_time(time)?)),
        None => Ok(CalendarDate::new(date)),
    }
}

fn ymd(year: &str, month: &str, day: &str) -> Result<NaiveDate, UnparseableReason> {
    let parse = |s: &str| {
        s.parse::<u32>()
            .map_err(|_| UnparseableReason::UnrecognizedFormat)
    };
    let year = i32::try_from(parse(year)?).map_err(|_| UnparseableReason::OutOfRange)?;
    NaiveDate::from_ymd_opt(year, parse(month)?, parse(day)?)
        .ok_or(UnparseableReason::InvalidCalendarDate)
}

/// Parse named-month and dotted layouts such as `Mar 21, 2024`.
pub fn parse_text(value: &str) -> ParseResult {
    for fmt in &TEXT_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(dt.into());
        }
    }
    for fmt in &TEXT_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Ok(date.into());
        }
    }
    Err(UnparseableReason::UnrecognizedFormat)
}
