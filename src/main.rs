//! Binary entry point for docs-preserve.
//!
//! Invoked by the docs build pipeline with `--save` before the static-site
//! build and `--restore` after it.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use clap::error::ErrorKind;
use docs_preserve::cli::output::{OutputFormat, format_error};
use docs_preserve::cli::{Cli, execute};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1, not clap's default 2
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    if cli.verbose {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(io::stderr)
            .try_init();
        tracing::debug!("verbose mode enabled");
    }

    let format = OutputFormat::parse(&cli.format).unwrap_or(OutputFormat::Text);

    let mut stdout = io::stdout();
    match execute(&cli, &mut stdout) {
        Ok(output) => {
            // Handle broken pipe gracefully
            if let Err(e) = write!(stdout, "{output}")
                && e.kind() != io::ErrorKind::BrokenPipe
            {
                eprintln!("Error writing to stdout: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let error_output = format_error(&e, format);
            match format {
                OutputFormat::Json => {
                    // JSON errors go to stdout for programmatic parsing
                    println!("{error_output}");
                }
                OutputFormat::Text => {
                    eprintln!("Error: {error_output}");
                }
            }
            ExitCode::FAILURE
        }
    }
}
