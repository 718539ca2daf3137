use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use octus_dates::{
    CalendarDate, DISPLAY_FORMAT, DateValue, NormalizationResult, NormalizeOptions,
    date_to_excel_serial, days_until_date_with, format_date_for_display_with, normalize_with,
};
use serde::Serialize;
use tracing::{info, info_span, warn};

/// One normalized command-line value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRow {
    pub input: String,
    pub kind: &'static str,
    pub iso: Option<String>,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Normalize each value. Plain numbers are read as spreadsheet serials.
pub fn run_normalize(values: &[String], options: &NormalizeOptions) -> Vec<NormalizedRow> {
    values
        .iter()
        .map(|input| {
            let value = DateValue::infer(input);
            let kind = value.kind();
            let result = normalize_with(value, options);
            let display = match result.date() {
                Some(date) => date.date().format(DISPLAY_FORMAT).to_string(),
                None => options.placeholder.clone(),
            };
            NormalizedRow {
                input: input.clone(),
                kind,
                iso: result.iso_string(),
                display,
                reason: result.error().map(|err| err.reason.to_string()),
            }
        })
        .collect()
}

pub fn run_display(value: &str, options: &NormalizeOptions) -> String {
    format_date_for_display_with(DateValue::infer(value), options)
}

/// Days from `from` (default: today) to `target`.
pub fn run_days_until(target: &str, from: Option<&str>, options: &NormalizeOptions) -> Result<i64> {
    let reference = from
        .map(|from| parse_required(from, options).context("reference date"))
        .transpose()?
        .map(|date| date.to_naive_datetime());
    days_until_date_with(DateValue::infer(target), reference, options)
        .ok_or_else(|| anyhow!("could not parse date '{target}'"))
        .context("target date")
}

pub fn run_to_serial(value: &str, options: &NormalizeOptions) -> Result<i64> {
    let date = parse_required(value, options)?;
    Ok(date_to_excel_serial(date.date()))
}

fn parse_required(value: &str, options: &NormalizeOptions) -> Result<CalendarDate> {
    normalize_with(DateValue::infer(value), options)
        .into_result()
        .map_err(|err| anyhow!(err))
}

/// A CSV column normalization job.
#[derive(Debug, Clone)]
pub struct CsvJob {
    pub input: PathBuf,
    pub column: String,
    /// Written to stdout when `None`.
    pub output: Option<PathBuf>,
}

/// Counts from a CSV run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CsvSummary {
    pub rows: usize,
    pub normalized: usize,
    pub blank: usize,
    pub unparseable: usize,
}

/// Rewrite one column of a CSV file as ISO dates.
///
/// Unparseable cells are blanked and logged; they never abort the run.
pub fn run_csv(job: &CsvJob, options: &NormalizeOptions) -> Result<CsvSummary> {
    validate_job(job)?;
    let span = info_span!("csv", input = %job.input.display(), column = %job.column);
    let _guard = span.enter();

    let mut reader = csv::Reader::from_path(&job.input)
        .with_context(|| format!("open {}", job.input.display()))?;
    let headers = reader.headers().context("read CSV header")?.clone();
    let index = find_column(&headers, &job.column)
        .ok_or_else(|| anyhow!("column '{}' not found in {}", job.column, job.input.display()))?;

    let sink: Box<dyn Write> = match &job.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(&headers).context("write CSV header")?;

    let mut summary = CsvSummary::default();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read CSV row {}", row + 1))?;
        summary.rows += 1;
        let cell = record.get(index).unwrap_or_default();
        let normalized = if cell.trim().is_empty() {
            summary.blank += 1;
            String::new()
        } else {
            match normalize_with(DateValue::infer(cell), options) {
                NormalizationResult::Parsed(date) => {
                    summary.normalized += 1;
                    date.iso_string()
                }
                NormalizationResult::Unparseable(err) => {
                    summary.unparseable += 1;
                    warn!(row = row + 1, value = %err.input, reason = %err.reason, "unparseable date");
                    String::new()
                }
            }
        };
        let fields = record
            .iter()
            .enumerate()
            .map(|(i, field)| if i == index { normalized.as_str() } else { field });
        writer
            .write_record(fields)
            .with_context(|| format!("write CSV row {}", row + 1))?;
    }
    writer.flush().context("flush CSV output")?;

    info!(
        rows = summary.rows,
        normalized = summary.normalized,
        blank = summary.blank,
        unparseable = summary.unparseable,
        "csv complete"
    );
    Ok(summary)
}

/// Exact header match first, then case-insensitive.
fn find_column(headers: &csv::StringRecord, column: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .or_else(|| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(column)))
}

/// Reject jobs that cannot run before touching the file system.
fn validate_job(job: &CsvJob) -> Result<()> {
    if job.column.trim().is_empty() {
        bail!("--column must not be empty");
    }
    if job.output.as_ref() == Some(&job.input) {
        bail!("output must differ from input {}", job.input.display());
    }
    Ok(())
}
