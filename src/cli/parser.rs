//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// docs-preserve: keep generated files alive across a static-site build.
///
/// Run with `--save` before the build and `--restore` after it.
#[derive(Parser, Debug)]
#[command(name = "docs-preserve")]
#[command(version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["save", "restore"])
))]
pub struct Cli {
    /// Copy the preserve set out of the docs directory.
    #[arg(long)]
    pub save: bool,

    /// Copy saved files back and remove the holding directory.
    #[arg(long)]
    pub restore: bool,

    /// Project root containing the docs directory.
    ///
    /// Defaults to the current directory.
    #[arg(long, env = "DOCS_PRESERVE_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text")]
    pub format: String,
}

/// Which half of the save/restore pair to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Copy files into the holding directory.
    Save,
    /// Copy files back out of the holding directory.
    Restore,
}

impl Cli {
    /// Returns the selected mode.
    ///
    /// The `mode` group guarantees exactly one flag is set.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        if self.save { Mode::Save } else { Mode::Restore }
    }

    /// Returns the project root, or the current directory.
    #[must_use]
    pub fn get_root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_save() {
        let cli = Cli::try_parse_from(["docs-preserve", "--save"]).unwrap();
        assert_eq!(cli.mode(), Mode::Save);
        assert_eq!(cli.format, "text");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_restore_with_root() {
        let cli =
            Cli::try_parse_from(["docs-preserve", "--restore", "--root", "/srv/site"]).unwrap();
        assert_eq!(cli.mode(), Mode::Restore);
        assert_eq!(cli.get_root(), PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_missing_mode_rejected() {
        let err = Cli::try_parse_from(["docs-preserve"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_both_modes_rejected() {
        let err = Cli::try_parse_from(["docs-preserve", "--save", "--restore"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = Cli::try_parse_from(["docs-preserve", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
