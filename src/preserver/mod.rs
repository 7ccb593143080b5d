//! Save and restore of the preserve set around a site build.
//!
//! A build pipeline calls [`save`] before the static-site build and
//! [`restore`] after it. The holding directory is the only state carried
//! between the two calls. Any filesystem failure aborts the run; there are
//! no retries.
//!
//! The `_with` variants hand each [`FileEntry`] to a callback as soon as
//! the file is handled, so callers can show progress before a failure.

use crate::core::{FileEntry, FileOutcome, Layout, PRESERVE_SET, RestoreReport, SaveReport};
use crate::error::Result;
use crate::io::{copy_file, ensure_dir, file_exists, remove_dir};

/// Copies every preserve-set file present in the docs directory into the
/// holding directory.
///
/// Missing files are skipped and any copy already held for them is kept,
/// so re-running save after a failed build never loses a saved file.
///
/// # Errors
///
/// Returns an error if the holding directory cannot be created or a file
/// cannot be copied.
pub fn save(layout: &Layout) -> Result<SaveReport> {
    save_with(layout, |_| {})
}

/// [`save`], reporting each file to `on_file` as it is handled.
///
/// # Errors
///
/// Same as [`save`].
pub fn save_with<F>(layout: &Layout, mut on_file: F) -> Result<SaveReport>
where
    F: FnMut(&FileEntry),
{
    ensure_dir(&layout.holding_dir)?;

    let mut files = Vec::with_capacity(PRESERVE_SET.len());
    for name in PRESERVE_SET {
        let source = layout.docs_file(name);

        let entry = if file_exists(&source)? {
            let bytes = copy_file(&source, layout.held_file(name))?;
            tracing::info!(file = name, bytes, "saved");
            FileEntry::copied(name, FileOutcome::Saved, bytes)
        } else {
            tracing::info!(file = name, "not found, skipped");
            FileEntry::missing(name, FileOutcome::Skipped)
        };
        on_file(&entry);
        files.push(entry);
    }

    Ok(SaveReport {
        docs_dir: layout.docs_dir.clone(),
        holding_dir: layout.holding_dir.clone(),
        files,
    })
}

/// Copies held files back into the docs directory and removes the holding
/// directory.
///
/// Does nothing when no holding directory exists. Files in the docs
/// directory that are not in the preserve set are never touched.
///
/// # Errors
///
/// Returns an error if the docs directory cannot be created, a file cannot
/// be copied, or the holding directory cannot be removed. On a copy
/// failure the holding directory is left in place.
pub fn restore(layout: &Layout) -> Result<RestoreReport> {
    restore_with(layout, |_| {})
}

/// [`restore`], reporting each file to `on_file` as it is handled.
///
/// # Errors
///
/// Same as [`restore`].
pub fn restore_with<F>(layout: &Layout, mut on_file: F) -> Result<RestoreReport>
where
    F: FnMut(&FileEntry),
{
    if !layout.holding_dir.is_dir() {
        tracing::info!(path = %layout.holding_dir.display(), "no holding directory, nothing to restore");
        return Ok(RestoreReport {
            docs_dir: layout.docs_dir.clone(),
            holding_dir: layout.holding_dir.clone(),
            nothing_saved: true,
            files: Vec::new(),
        });
    }

    ensure_dir(&layout.docs_dir)?;

    let mut files = Vec::with_capacity(PRESERVE_SET.len());
    for name in PRESERVE_SET {
        let held = layout.held_file(name);

        let entry = if file_exists(&held)? {
            let bytes = copy_file(&held, layout.docs_file(name))?;
            tracing::info!(file = name, bytes, "restored");
            FileEntry::copied(name, FileOutcome::Restored, bytes)
        } else {
            tracing::info!(file = name, "not held, skipped");
            FileEntry::missing(name, FileOutcome::NotHeld)
        };
        on_file(&entry);
        files.push(entry);
    }

    remove_dir(&layout.holding_dir)?;

    Ok(RestoreReport {
        docs_dir: layout.docs_dir.clone(),
        holding_dir: layout.holding_dir.clone(),
        nothing_saved: false,
        files,
    })
}
