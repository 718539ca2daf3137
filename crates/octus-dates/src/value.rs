//! Raw date representations as they arrive on the wire.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer};

/// A date value before normalization.
///
/// Built fresh per call from whatever the payload carried and discarded
/// once normalized.
#[derive(Debug, Clone, PartialEq)]
pub enum DateValue {
    /// Spreadsheet day count; the fraction encodes the time of day.
    ///
    /// Values at or above the configured serial ceiling are read as
    /// Unix timestamps instead.
    Serial(f64),
    /// Unix timestamp, seconds or milliseconds.
    Timestamp(f64),
    /// Text starting with `YYYY-MM-DD`.
    IsoString(String),
    /// Text with exactly two `/` separators.
    SlashString(String),
    /// Named-month or dotted text such as `Mar 21, 2024` or `21.03.2024`.
    TextString(String),
    /// An already-typed date/time.
    DateTime(NaiveDateTime),
    /// Input that matched no representation, kept verbatim.
    Unparseable(String),
}

impl DateValue {
    /// Classify text by its shape. Numeric-looking text is not treated as a
    /// number; see [`DateValue::infer`] for that.
    pub fn from_text(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Self::Unparseable(value.to_string());
        }
        if has_iso_date_prefix(trimmed) {
            return Self::IsoString(trimmed.to_string());
        }
        if trimmed.matches('/').count() == 2 {
            return Self::SlashString(trimmed.to_string());
        }
        if trimmed.chars().any(|c| c.is_ascii_alphabetic()) || trimmed.contains('.') {
            return Self::TextString(trimmed.to_string());
        }
        Self::Unparseable(trimmed.to_string())
    }

    /// Classify loosely typed text, reading plain decimal numbers as serials.
    ///
    /// Used for CSV cells and command-line arguments where a spreadsheet
    /// export may have written `45372.2292` as text.
    pub fn infer(value: &str) -> Self {
        let trimmed = value.trim();
        if looks_numeric(trimmed)
            && let Ok(number) = trimmed.parse::<f64>()
        {
            return Self::Serial(number);
        }
        Self::from_text(value)
    }

    /// Label for the representation, used in logs and reports.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Serial(_) => "serial",
            Self::Timestamp(_) => "timestamp",
            Self::IsoString(_) => "iso",
            Self::SlashString(_) => "slash",
            Self::TextString(_) => "text",
            Self::DateTime(_) => "datetime",
            Self::Unparseable(_) => "unparseable",
        }
    }
}

/// `YYYY-MM-DD` at the start of the string.
fn has_iso_date_prefix(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= 10
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[7] == b'-'
        && bytes[8..10].iter().all(u8::is_ascii_digit)
}

/// Optional sign, digits, at most one decimal point. Rejects `inf`, `NaN`, `1e5`.
fn looks_numeric(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty()
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial(n) | Self::Timestamp(n) => write!(f, "{n}"),
            Self::IsoString(s)
            | Self::SlashString(s)
            | Self::TextString(s)
            | Self::Unparseable(s) => f.write_str(s),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

impl From<f64> for DateValue {
    fn from(value: f64) -> Self {
        Self::Serial(value)
    }
}

impl From<i64> for DateValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Serial(value as f64)
    }
}

impl From<i32> for DateValue {
    fn from(value: i32) -> Self {
        Self::Serial(f64::from(value))
    }
}

impl From<&str> for DateValue {
    fn from(value: &str) -> Self {
        Self::from_text(value)
    }
}

impl From<String> for DateValue {
    fn from(value: String) -> Self {
        Self::from_text(&value)
    }
}

impl From<&String> for DateValue {
    fn from(value: &String) -> Self {
        Self::from_text(value)
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(value: NaiveDate) -> Self {
        Self::DateTime(value.and_time(NaiveTime::MIN))
    }
}

impl<T: Into<DateValue>> From<Option<T>> for DateValue {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(|| Self::Unparseable(String::new()), Into::into)
    }
}

impl From<&DateValue> for DateValue {
    fn from(value: &DateValue) -> Self {
        value.clone()
    }
}

/// Wire shape of a date field: a JSON number or a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawDate>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawDate::Number(n)) => Self::Serial(n),
            Some(RawDate::Text(s)) => Self::from_text(&s),
            None => Self::Unparseable(String::new()),
        })
    }
}
