//! Library side of the `octus-dates` command-line tool.

pub mod commands;
pub mod config;
pub mod logging;
pub mod report;
