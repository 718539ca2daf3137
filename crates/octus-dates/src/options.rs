//! Configuration options for date normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default placeholder rendered for dates that cannot be displayed.
pub const DEFAULT_PLACEHOLDER: &str = "Not set";

/// Numbers at or above this value are Unix timestamps, not spreadsheet serials.
pub const DEFAULT_SERIAL_CEILING: f64 = 100_000.0;

/// Field order for `a/b/YYYY` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlashOrder {
    /// First group above 12 is a day (`DD/MM/YYYY`), otherwise a month
    /// (`MM/DD/YYYY`). Days 1-12 stay ambiguous and resolve to US order.
    #[default]
    Heuristic,
    /// Always `MM/DD/YYYY`.
    MonthFirst,
    /// Always `DD/MM/YYYY`.
    DayFirst,
}

impl SlashOrder {
    /// Get a human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Heuristic => "heuristic",
            Self::MonthFirst => "month-first",
            Self::DayFirst => "day-first",
        }
    }
}

impl fmt::Display for SlashOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Options for normalization and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// How to order the groups of slash-delimited dates.
    pub slash_order: SlashOrder,

    /// Numeric inputs at or above this value are read as Unix timestamps.
    pub serial_ceiling: f64,

    /// Text returned by display formatting when the input is unparseable.
    pub placeholder: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            slash_order: SlashOrder::default(),
            serial_ceiling: DEFAULT_SERIAL_CEILING,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_slash_order(mut self, order: SlashOrder) -> Self {
        self.slash_order = order;
        self
    }

    #[must_use]
    pub fn with_serial_ceiling(mut self, ceiling: f64) -> Self {
        self.serial_ceiling = ceiling;
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}
