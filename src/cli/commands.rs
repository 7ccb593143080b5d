//! CLI command implementations.
//!
//! Resolves the layout from the parsed arguments and dispatches to the
//! selected mode.

use crate::cli::output::{OutputFormat, format_progress, format_restore, format_save};
use crate::cli::parser::{Cli, Mode};
use crate::core::{FileEntry, Layout};
use crate::error::{CommandError, Result};
use crate::preserver;
use std::io::{self, Write};

/// Executes the CLI command.
///
/// In text mode each file's progress line is written to `progress` as soon
/// as the file is handled, so an operator sees how far a failed run got.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
/// * `progress` - Destination for per-file progress lines.
///
/// # Returns
///
/// Result with the summary (text) or full report (JSON) on success.
///
/// # Errors
///
/// Returns an error if arguments are invalid or the filesystem operation
/// fails. Argument checks run before anything on disk is touched.
pub fn execute<W: Write>(cli: &Cli, progress: &mut W) -> Result<String> {
    let format = OutputFormat::parse(&cli.format)?;
    let root = cli.get_root();

    if !root.is_dir() {
        return Err(CommandError::InvalidArgument(format!(
            "project root is not a directory: {}",
            root.display()
        ))
        .into());
    }

    let layout = Layout::from_root(&root);
    tracing::debug!(
        docs = %layout.docs_dir.display(),
        holding = %layout.holding_dir.display(),
        mode = ?cli.mode(),
        "resolved layout"
    );

    let mut sink = ProgressSink::new(format, progress);
    match cli.mode() {
        Mode::Save => cmd_save(&layout, format, &mut sink),
        Mode::Restore => cmd_restore(&layout, format, &mut sink),
    }
}

/// Writes progress lines in text mode and remembers the first write error.
struct ProgressSink<'a, W: Write> {
    enabled: bool,
    out: &'a mut W,
    error: Option<io::Error>,
}

impl<'a, W: Write> ProgressSink<'a, W> {
    fn new(format: OutputFormat, out: &'a mut W) -> Self {
        Self {
            enabled: format == OutputFormat::Text,
            out,
            error: None,
        }
    }

    fn report(&mut self, entry: &FileEntry) {
        if !self.enabled || self.error.is_some() {
            return;
        }
        let line = format_progress(entry);
        if let Err(e) = self.out.write_all(line.as_bytes()).and_then(|()| self.out.flush()) {
            self.error = Some(e);
        }
    }

    /// Surfaces a write failure once the operation itself has succeeded.
    fn finish(&mut self) -> Result<()> {
        match self.error.take() {
            Some(e) if e.kind() != io::ErrorKind::BrokenPipe => {
                Err(CommandError::OutputFormat(format!("failed to write progress: {e}")).into())
            }
            _ => Ok(()),
        }
    }
}

fn cmd_save<W: Write>(
    layout: &Layout,
    format: OutputFormat,
    sink: &mut ProgressSink<'_, W>,
) -> Result<String> {
    let report = preserver::save_with(layout, |entry| sink.report(entry))?;
    sink.finish()?;
    format_save(&report, format)
}

fn cmd_restore<W: Write>(
    layout: &Layout,
    format: OutputFormat,
    sink: &mut ProgressSink<'_, W>,
) -> Result<String> {
    let report = preserver::restore_with(layout, |entry| sink.report(entry))?;
    sink.finish()?;
    format_restore(&report, format)
}
