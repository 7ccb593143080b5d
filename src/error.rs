//! Error types for docs-preserve operations.
//!
//! Filesystem failures are fatal: every variant carries the path involved
//! and the OS reason so the diagnostic names the step that failed.

use thiserror::Error;

/// Result type alias for preserve operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Copying a file failed.
    #[error("failed to copy {from} to {to}: {reason}")]
    CopyFailed {
        /// Source path.
        from: String,
        /// Destination path.
        to: String,
        /// Reason for failure.
        reason: String,
    },

    /// Removing a file or directory failed.
    #[error("failed to remove {path}: {reason}")]
    RemoveFailed {
        /// Path that could not be removed.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Inspecting a path failed.
    #[error("failed to read metadata: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputFormat(err.to_string())
    }
}
