//! I/O utilities for docs-preserve.
//!
//! Provides the directory and file primitives used by save and restore.

pub mod fs;

pub use fs::{copy_file, ensure_dir, file_exists, remove_dir};
