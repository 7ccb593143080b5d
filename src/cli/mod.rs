//! CLI layer for docs-preserve.
//!
//! Provides the command-line interface using clap: mode selection, layout
//! resolution and output rendering.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Mode};
