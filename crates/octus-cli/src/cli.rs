//! CLI argument definitions for `octus-dates`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use octus_dates::SlashOrder;

#[derive(Parser)]
#[command(
    name = "octus-dates",
    version,
    about = "Normalize task due dates to ISO calendar dates",
    long_about = "Normalize task due dates to ISO calendar dates.\n\n\
                  Accepts spreadsheet serials (45372.229), Unix timestamps, ISO strings,\n\
                  slash dates (MM/DD/YYYY or DD/MM/YYYY when the first group exceeds 12)\n\
                  and named-month text (Mar 21, 2024)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machines).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// JSON file with normalization options.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Field order for slash dates whose first group is 12 or less.
    #[arg(long = "slash-order", value_enum, global = true)]
    pub slash_order: Option<SlashOrderArg>,

    /// Numbers at or above this value are Unix timestamps, not serials.
    #[arg(long = "serial-ceiling", value_name = "N", global = true)]
    pub serial_ceiling: Option<f64>,

    /// Text shown for dates that cannot be displayed.
    #[arg(long = "placeholder", value_name = "TEXT", global = true)]
    pub placeholder: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize one or more values and show how each was read.
    Normalize(NormalizeArgs),

    /// Render a value as `Mon DD, YYYY`.
    Display(DisplayArgs),

    /// Count calendar days until a target date.
    DaysUntil(DaysUntilArgs),

    /// Print the spreadsheet serial for a date.
    ToSerial(ToSerialArgs),

    /// Normalize one column of a CSV file.
    Csv(CsvArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Values to normalize.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    /// Print a JSON array instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct DisplayArgs {
    #[arg(value_name = "VALUE")]
    pub value: String,
}

#[derive(Parser)]
pub struct DaysUntilArgs {
    /// Target date.
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Reference date (default: today).
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<String>,
}

#[derive(Parser)]
pub struct ToSerialArgs {
    #[arg(value_name = "DATE")]
    pub value: String,
}

#[derive(Parser)]
pub struct CsvArgs {
    /// CSV file with a header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Header of the date column.
    #[arg(long = "column", value_name = "NAME")]
    pub column: String,

    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SlashOrderArg {
    Heuristic,
    MonthFirst,
    DayFirst,
}

impl From<SlashOrderArg> for SlashOrder {
    fn from(value: SlashOrderArg) -> Self {
        match value {
            SlashOrderArg::Heuristic => Self::Heuristic,
            SlashOrderArg::MonthFirst => Self::MonthFirst,
            SlashOrderArg::DayFirst => Self::DayFirst,
        }
    }
}
