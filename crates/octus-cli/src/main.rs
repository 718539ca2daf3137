//! Octus date normalization CLI.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use octus_cli::commands::{
    CsvJob, run_csv, run_days_until, run_display, run_normalize, run_to_serial,
};
use octus_cli::config::{Overrides, load_options};
use octus_cli::logging::{LogConfig, LogFormat, init_logging};
use octus_cli::report::{csv_summary_table, normalize_table, rows_to_json};
use octus_dates::NormalizeOptions;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let overrides = Overrides {
        slash_order: cli.slash_order.map(Into::into),
        serial_ceiling: cli.serial_ceiling,
        placeholder: cli.placeholder.clone(),
    };
    let exit_code = match load_options(cli.config.as_deref(), &overrides) {
        Ok(options) => match run(&cli.command, &options) {
            Ok(code) => code,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: &Command, options: &NormalizeOptions) -> Result<i32> {
    match command {
        Command::Normalize(args) => {
            let rows = run_normalize(&args.values, options);
            if args.json {
                println!("{}", rows_to_json(&rows)?);
            } else {
                println!("{}", normalize_table(&rows));
            }
            // Unparseable values are reported, not failures.
            Ok(0)
        }
        Command::Display(args) => {
            println!("{}", run_display(&args.value, options));
            Ok(0)
        }
        Command::DaysUntil(args) => {
            let days = run_days_until(&args.target, args.from.as_deref(), options)?;
            println!("{days}");
            Ok(0)
        }
        Command::ToSerial(args) => {
            println!("{}", run_to_serial(&args.value, options)?);
            Ok(0)
        }
        Command::Csv(args) => {
            let job = CsvJob {
                input: args.input.clone(),
                column: args.column.clone(),
                output: args.output.clone(),
            };
            let summary = run_csv(&job, options)?;
            // stdout may be carrying the CSV itself.
            eprintln!("{}", csv_summary_table(&summary));
            Ok(0)
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
