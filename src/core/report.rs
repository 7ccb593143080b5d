//! Results of save and restore runs.
//!
//! Reports are plain data. The CLI layer turns them into progress lines or
//! JSON; library code never prints.

use serde::Serialize;
use std::path::PathBuf;

/// What happened to one preserve-set file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcome {
    /// Copied from the docs directory into the holding directory.
    Saved,

    /// Absent from the docs directory at save time.
    Skipped,

    /// Copied from the holding directory back into the docs directory.
    Restored,

    /// Absent from the holding directory at restore time.
    NotHeld,
}

impl FileOutcome {
    /// Returns true if the file was copied.
    #[must_use]
    pub const fn copied(self) -> bool {
        matches!(self, Self::Saved | Self::Restored)
    }
}

/// Outcome for a single named file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// File name from the preserve set.
    pub name: String,

    /// What happened to it.
    pub outcome: FileOutcome,

    /// Bytes copied, if the file was copied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
}

impl FileEntry {
    /// Entry for a copied file.
    pub fn copied(name: &str, outcome: FileOutcome, bytes: u64) -> Self {
        Self {
            name: name.to_string(),
            outcome,
            bytes: Some(bytes),
        }
    }

    /// Entry for a file that was not copied.
    pub fn missing(name: &str, outcome: FileOutcome) -> Self {
        Self {
            name: name.to_string(),
            outcome,
            bytes: None,
        }
    }
}

/// Result of a save run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    /// Directory files were read from.
    pub docs_dir: PathBuf,

    /// Directory files were written to.
    pub holding_dir: PathBuf,

    /// One entry per preserve-set name, in preserve-set order.
    pub files: Vec<FileEntry>,
}

impl SaveReport {
    /// Number of files saved.
    #[must_use]
    pub fn saved_count(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.copied()).count()
    }
}

/// Result of a restore run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestoreReport {
    /// Directory files were written back to.
    pub docs_dir: PathBuf,

    /// Directory files were read from.
    pub holding_dir: PathBuf,

    /// True when no holding directory existed; nothing was touched.
    pub nothing_saved: bool,

    /// One entry per preserve-set name, in preserve-set order. Empty when
    /// `nothing_saved` is set.
    pub files: Vec<FileEntry>,
}

impl RestoreReport {
    /// Number of files restored.
    #[must_use]
    pub fn restored_count(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.copied()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_copied() {
        assert!(FileOutcome::Saved.copied());
        assert!(FileOutcome::Restored.copied());
        assert!(!FileOutcome::Skipped.copied());
        assert!(!FileOutcome::NotHeld.copied());
    }

    #[test]
    fn test_save_report_counts() {
        let report = SaveReport {
            docs_dir: PathBuf::from("docs"),
            holding_dir: PathBuf::from(".docs-preserve"),
            files: vec![
                FileEntry::copied("llms.txt", FileOutcome::Saved, 3),
                FileEntry::missing("llms-full.txt", FileOutcome::Skipped),
            ],
        };
        assert_eq!(report.saved_count(), 1);
    }

    #[test]
    fn test_entry_serialization() {
        let entry = FileEntry::missing(".nojekyll", FileOutcome::NotHeld);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":".nojekyll","outcome":"not_held"}"#);

        let entry = FileEntry::copied("llms.txt", FileOutcome::Saved, 12);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""outcome":"saved""#));
        assert!(json.contains(r#""bytes":12"#));
    }
}
