//! Date normalization for Octus task payloads.
//!
//! Task records arrive from spreadsheets and web forms with due dates in
//! whatever shape the source produced. This crate turns them into ISO
//! calendar dates:
//!
//! - **value**: the raw wire representations ([`DateValue`])
//! - **normalize**: dispatch to a [`NormalizationResult`]
//! - **serial**: spreadsheet serial numbers and Unix timestamps
//! - **parse**: ISO, slash-delimited and named-month text
//! - **display**: `Mon DD, YYYY` rendering
//! - **days**: day counts until a target date
//! - **serde_date**: `deserialize_with` helpers for request models
//!
//! Every function is pure and stateless. Unparseable input is reported as
//! a value, never a panic; callers decide whether it is a warning or an
//! error.

pub mod calendar;
pub mod days;
pub mod display;
pub mod error;
pub mod normalize;
pub mod options;
pub mod parse;
pub mod serde_date;
pub mod serial;
pub mod value;

pub use calendar::{CalendarDate, ISO_DATE_FORMAT, NormalizationResult};
pub use days::{days_between, days_until_date, days_until_date_with};
pub use display::{DISPLAY_FORMAT, format_date_for_display, format_date_for_display_with};
pub use error::{UnparseableDate, UnparseableReason};
pub use normalize::{normalize, normalize_with, parse_date, validate_date_string};
pub use options::{DEFAULT_PLACEHOLDER, DEFAULT_SERIAL_CEILING, NormalizeOptions, SlashOrder};
pub use serial::{EXCEL_EPOCH, date_to_excel_serial, excel_serial_to_date, unix_timestamp_to_datetime};
pub use value::DateValue;
