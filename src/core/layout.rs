//! Preserve set and directory layout.

use std::path::{Path, PathBuf};

/// Files copied out of the docs directory before a site build.
///
/// Order is the processing order for save and restore. Names are unique.
pub const PRESERVE_SET: [&str; 4] = ["llms.txt", "llms-full.txt", ".nojekyll", "manifest.json"];

/// Documentation directory name, relative to the project root.
pub const DOCS_DIR: &str = "docs";

/// Holding directory name, relative to the project root.
pub const HOLDING_DIR: &str = ".docs-preserve";

/// Resolved locations for one project.
///
/// # Examples
///
/// ```
/// use docs_preserve::core::Layout;
///
/// let layout = Layout::from_root("/srv/site");
/// assert!(layout.docs_dir.ends_with("docs"));
/// assert!(layout.holding_dir.ends_with(".docs-preserve"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Directory the static-site build writes into.
    pub docs_dir: PathBuf,

    /// Transient storage between save and restore.
    pub holding_dir: PathBuf,
}

impl Layout {
    /// Builds the layout for a project root.
    pub fn from_root<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        Self {
            docs_dir: root.join(DOCS_DIR),
            holding_dir: root.join(HOLDING_DIR),
        }
    }

    /// Path of a preserve-set file inside the docs directory.
    #[must_use]
    pub fn docs_file(&self, name: &str) -> PathBuf {
        self.docs_dir.join(name)
    }

    /// Path of a preserve-set file inside the holding directory.
    #[must_use]
    pub fn held_file(&self, name: &str) -> PathBuf {
        self.holding_dir.join(name)
    }
}
