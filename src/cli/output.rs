//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{FileEntry, FileOutcome, RestoreReport, SaveReport};
use crate::error::{CommandError, Error, Result};
use serde::Serialize;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidArgument`] for anything other than
    /// `text` or `json`.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CommandError::InvalidArgument(format!(
                "unknown output format '{other}' (expected text or json)"
            ))
            .into()),
        }
    }
}

/// Formats the progress line for one handled file.
///
/// Text mode writes these as each file is handled, ahead of the summary.
#[must_use]
pub fn format_progress(entry: &FileEntry) -> String {
    match entry.outcome {
        FileOutcome::Saved => format!("Saved {}\n", entry.name),
        FileOutcome::Skipped => format!("Skipped {} (not found)\n", entry.name),
        FileOutcome::Restored => format!("Restored {}\n", entry.name),
        FileOutcome::NotHeld => format!("Skipped {} (not saved)\n", entry.name),
    }
}

/// Formats a save report.
///
/// Text output is the summary line only; per-file lines come from
/// [`format_progress`].
pub fn format_save(report: &SaveReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Preserved {} of {} file(s) in {}\n",
            report.saved_count(),
            report.files.len(),
            report.holding_dir.display()
        )),
        OutputFormat::Json => format_json(report),
    }
}

/// Formats a restore report.
///
/// Text output is the summary line only; per-file lines come from
/// [`format_progress`].
pub fn format_restore(report: &RestoreReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_restore_text(report)),
        OutputFormat::Json => format_json(report),
    }
}

fn format_restore_text(report: &RestoreReport) -> String {
    if report.nothing_saved {
        return format!(
            "Nothing to restore: {} does not exist\n",
            report.holding_dir.display()
        );
    }
    format!(
        "Restored {} file(s) to {}\n",
        report.restored_count(),
        report.docs_dir.display()
    )
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                success: bool,
                error: String,
            }
            let output = ErrorOutput {
                success: false,
                error: error.to_string(),
            };
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| error.to_string())
        }
    }
}

fn format_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).map_err(CommandError::from)?;
    json.push('\n');
    Ok(json)
}
