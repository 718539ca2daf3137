//! Normalization options from a JSON file plus command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use octus_dates::{NormalizeOptions, SlashOrder};
use tracing::debug;

/// Flag values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub slash_order: Option<SlashOrder>,
    pub serial_ceiling: Option<f64>,
    pub placeholder: Option<String>,
}

/// Load options from `path` (defaults when absent) and apply `overrides`.
///
/// Missing keys in the file keep their defaults.
pub fn load_options(path: Option<&Path>, overrides: &Overrides) -> Result<NormalizeOptions> {
    let mut options = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            let options: NormalizeOptions = serde_json::from_str(&text)
                .with_context(|| format!("parse config {}", path.display()))?;
            debug!(path = %path.display(), "loaded normalization config");
            options
        }
        None => NormalizeOptions::default(),
    };

    if let Some(order) = overrides.slash_order {
        options = options.with_slash_order(order);
    }
    if let Some(ceiling) = overrides.serial_ceiling {
        options = options.with_serial_ceiling(ceiling);
    }
    if let Some(placeholder) = &overrides.placeholder {
        options = options.with_placeholder(placeholder.clone());
    }
    Ok(options)
}
