//! Serde helpers for request models carrying raw date fields.
//!
//! Use with `#[serde(default, deserialize_with = "octus_dates::serde_date::deserialize")]`
//! on an `Option<String>` field. The field accepts a JSON number (spreadsheet
//! serial or timestamp), a string, or null, and ends up holding the normalized
//! `YYYY-MM-DD` date. Values that cannot be parsed become `None` with a
//! warning; they never fail the surrounding request.

use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::calendar::NormalizationResult;
use crate::error::UnparseableReason;
use crate::normalize::normalize;
use crate::value::DateValue;

/// Deserialize a raw date field into its normalized ISO string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = DateValue::deserialize(deserializer)?;
    match normalize(value) {
        NormalizationResult::Parsed(date) => Ok(Some(date.iso_string())),
        NormalizationResult::Unparseable(err) => {
            if !err.input.trim().is_empty() {
                warn!(input = %err.input, reason = %err.reason, "dropping unparseable date");
            }
            Ok(None)
        }
    }
}

/// Like [`deserialize`], but an unparseable value is a hard validation error.
pub fn deserialize_strict<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = DateValue::deserialize(deserializer)?;
    match normalize(value) {
        NormalizationResult::Parsed(date) => Ok(Some(date.iso_string())),
        NormalizationResult::Unparseable(err)
            if err.reason == UnparseableReason::Empty =>
        {
            Ok(None)
        }
        NormalizationResult::Unparseable(err) => Err(serde::de::Error::custom(err)),
    }
}
