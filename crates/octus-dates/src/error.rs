//! The single failure kind of the normalizer.

use std::fmt;

use thiserror::Error;

/// Why an input could not be normalized.
///
/// Purely diagnostic: every reason is the same failure to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnparseableReason {
    /// Null, empty or whitespace-only input.
    Empty,
    /// The input matched none of the recognized representations.
    UnrecognizedFormat,
    /// A recognized layout carrying an impossible date or time (month 13, Feb 30, 25:00).
    InvalidCalendarDate,
    /// A number that is non-finite, not positive, or outside the calendar range.
    OutOfRange,
}

impl UnparseableReason {
    /// Short label used in logs and CLI output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::UnrecognizedFormat => "unrecognized format",
            Self::InvalidCalendarDate => "invalid calendar date",
            Self::OutOfRange => "out of range",
        }
    }
}

impl fmt::Display for UnparseableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A date value that could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse date '{input}': {reason}")]
pub struct UnparseableDate {
    /// The original input, rendered as text.
    pub input: String,
    /// Diagnostic detail.
    pub reason: UnparseableReason,
}

impl UnparseableDate {
    pub(crate) fn new(input: impl Into<String>, reason: UnparseableReason) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }
}

/// Result type for conversions that surface the unparseable marker as an error.
pub type Result<T> = std::result::Result<T, UnparseableDate>;
