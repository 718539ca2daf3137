//! Human-readable rendering.

use crate::normalize::normalize_with;
use crate::options::NormalizeOptions;
use crate::value::DateValue;

/// `Mar 21, 2024`.
pub const DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Render a date as `Mon DD, YYYY`, or `Not set` when it cannot be parsed.
///
/// ```
/// use octus_dates::format_date_for_display;
///
/// assert_eq!(format_date_for_display(45372), "Mar 21, 2024");
/// assert_eq!(format_date_for_display("garbage"), "Not set");
/// ```
pub fn format_date_for_display(input: impl Into<DateValue>) -> String {
    format_date_for_display_with(input, &NormalizeOptions::default())
}

/// Render with explicit options; the placeholder comes from `options`.
pub fn format_date_for_display_with(
    input: impl Into<DateValue>,
    options: &NormalizeOptions,
) -> String {
    normalize_with(input, options).date().map_or_else(
        || options.placeholder.clone(),
        |date| date.date().format(DISPLAY_FORMAT).to_string(),
    )
}
