//! Normalized calendar dates and the normalization result.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::UnparseableDate;
use crate::normalize::normalize;

/// ISO 8601 calendar date layout.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A valid proleptic Gregorian date, with the time of day when the input had one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    date: NaiveDate,
    time: Option<NaiveTime>,
}

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, time: None }
    }

    pub fn with_time(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time: Some(time),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    /// Date at the recorded time, or midnight.
    pub fn to_naive_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or(NaiveTime::MIN))
    }

    /// `YYYY-MM-DD`.
    pub fn iso_string(&self) -> String {
        self.date.format(ISO_DATE_FORMAT).to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(value: NaiveDateTime) -> Self {
        Self::with_time(value.date(), value.time())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format(ISO_DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = UnparseableDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s).into_result()
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.iso_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = crate::DateValue::deserialize(deserializer)?;
        normalize(value)
            .into_result()
            .map_err(serde::de::Error::custom)
    }
}

/// Outcome of normalizing one value. Failure is a value, never a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum NormalizationResult {
    /// The input named a valid calendar date.
    Parsed(CalendarDate),
    /// The input could not be interpreted.
    Unparseable(UnparseableDate),
}

impl NormalizationResult {
    /// Returns true if the input was normalized.
    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }

    /// Returns the normalized date if present.
    pub fn date(&self) -> Option<&CalendarDate> {
        match self {
            Self::Parsed(date) => Some(date),
            Self::Unparseable(_) => None,
        }
    }

    /// Returns the failure if the input was unparseable.
    pub fn error(&self) -> Option<&UnparseableDate> {
        match self {
            Self::Parsed(_) => None,
            Self::Unparseable(err) => Some(err),
        }
    }

    /// `YYYY-MM-DD` for a parsed date.
    pub fn iso_string(&self) -> Option<String> {
        self.date().map(CalendarDate::iso_string)
    }

    pub fn into_option(self) -> Option<CalendarDate> {
        match self {
            Self::Parsed(date) => Some(date),
            Self::Unparseable(_) => None,
        }
    }

    pub fn into_result(self) -> Result<CalendarDate, UnparseableDate> {
        match self {
            Self::Parsed(date) => Ok(date),
            Self::Unparseable(err) => Err(err),
        }
    }
}

impl From<Result<CalendarDate, UnparseableDate>> for NormalizationResult {
    fn from(value: Result<CalendarDate, UnparseableDate>) -> Self {
        match value {
            Ok(date) => Self::Parsed(date),
            Err(err) => Self::Unparseable(err),
        }
    }
}
