//! # docs-preserve
//!
//! Keeps hand-maintained files in a documentation directory alive across a
//! static-site build that would otherwise delete or regenerate them.
//!
//! The build pipeline runs `docs-preserve --save` before the build, which
//! copies a fixed set of files (`llms.txt`, `llms-full.txt`, `.nojekyll`,
//! `manifest.json`) into a holding directory, and `docs-preserve --restore`
//! after it, which copies them back and removes the holding directory.
//!
//! ```no_run
//! use docs_preserve::{Layout, restore, save};
//!
//! let layout = Layout::from_root(".");
//! save(&layout)?;
//! // ... static-site build runs here ...
//! restore(&layout)?;
//! # Ok::<(), docs_preserve::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod preserver;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

pub use crate::core::{FileEntry, FileOutcome, Layout, PRESERVE_SET, RestoreReport, SaveReport};

pub use preserver::{restore, restore_with, save, save_with};

pub use cli::{Cli, Mode, OutputFormat};
