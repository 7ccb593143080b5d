//! Core domain models for docs-preserve.
//!
//! The fixed preserve set, the directory layout, and the reports produced
//! by save and restore. These are pure data with no I/O.

pub mod layout;
pub mod report;

pub use layout::{DOCS_DIR, HOLDING_DIR, Layout, PRESERVE_SET};
pub use report::{FileEntry, FileOutcome, RestoreReport, SaveReport};
