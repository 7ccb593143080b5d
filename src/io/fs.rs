//! Filesystem primitives used by save and restore.
//!
//! Thin wrappers over `std::fs` that map each failure onto an [`IoError`]
//! variant naming the step and the path involved.

use crate::error::{IoError, Result};
use std::io::ErrorKind;
use std::path::Path;

fn display(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Creates a directory and all missing parents.
///
/// Succeeds without doing anything if the directory already exists.
///
/// # Errors
///
/// Returns [`IoError::DirectoryFailed`] if creation fails.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path_ref = path.as_ref();
    if path_ref.is_dir() {
        return Ok(());
    }

    std::fs::create_dir_all(path_ref).map_err(|e| IoError::DirectoryFailed {
        path: display(path_ref),
        reason: e.to_string(),
    })?;

    tracing::debug!(path = %path_ref.display(), "created directory");
    Ok(())
}

/// Returns true if `path` names an existing regular file.
///
/// Symlinks are followed. A missing path is not an error.
///
/// # Errors
///
/// Returns [`IoError::ReadFailed`] if the metadata lookup fails for any
/// reason other than the path not existing.
pub fn file_exists<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path_ref = path.as_ref();
    match std::fs::metadata(path_ref) {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(IoError::ReadFailed {
            path: display(path_ref),
            reason: e.to_string(),
        }
        .into()),
    }
}

/// Copies `from` to `to` byte-for-byte, overwriting `to` if present.
///
/// # Returns
///
/// Number of bytes copied.
///
/// # Errors
///
/// Returns [`IoError::CopyFailed`] if the copy fails.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<u64> {
    let (from, to) = (from.as_ref(), to.as_ref());

    let bytes = std::fs::copy(from, to).map_err(|e| IoError::CopyFailed {
        from: display(from),
        to: display(to),
        reason: e.to_string(),
    })?;

    tracing::debug!(from = %from.display(), to = %to.display(), bytes, "copied file");
    Ok(bytes)
}

/// Removes a directory and everything under it.
///
/// # Errors
///
/// Returns [`IoError::RemoveFailed`] if removal fails.
pub fn remove_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path_ref = path.as_ref();

    std::fs::remove_dir_all(path_ref).map_err(|e| IoError::RemoveFailed {
        path: display(path_ref),
        reason: e.to_string(),
    })?;

    tracing::debug!(path = %path_ref.display(), "removed directory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("c");

        assert!(!nested.exists());
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_dir_existing_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        ensure_dir(temp_dir.path()).unwrap();
        ensure_dir(temp_dir.path()).unwrap();
        assert!(temp_dir.path().is_dir());
    }

    #[test]
    fn test_ensure_dir_over_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("occupied");
        std::fs::write(&file_path, "x").unwrap();

        let result = ensure_dir(&file_path);
        assert!(matches!(
            result,
            Err(Error::Io(IoError::DirectoryFailed { .. }))
        ));
    }

    #[test]
    fn test_file_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("present.txt");
        std::fs::write(&file_path, "x").unwrap();

        assert!(file_exists(&file_path).unwrap());
        assert!(!file_exists(temp_dir.path().join("absent.txt")).unwrap());
        // Directories are not files
        assert!(!file_exists(temp_dir.path()).unwrap());
    }

    #[test]
    fn test_copy_file_binary_content() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("in.bin");
        let to = temp_dir.path().join("out.bin");
        let content = b"\x00\x01\x02\xff\xfe";
        std::fs::write(&from, content).unwrap();

        let bytes = copy_file(&from, &to).unwrap();
        assert_eq!(bytes, 5);
        assert_eq!(std::fs::read(&to).unwrap(), content);
    }

    #[test]
    fn test_copy_file_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("new.txt");
        let to = temp_dir.path().join("old.txt");
        std::fs::write(&from, "short").unwrap();
        std::fs::write(&to, "much longer previous content").unwrap();

        copy_file(&from, &to).unwrap();
        assert_eq!(std::fs::read_to_string(&to).unwrap(), "short");
    }

    #[test]
    fn test_copy_file_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let result = copy_file(
            temp_dir.path().join("nope.txt"),
            temp_dir.path().join("out.txt"),
        );
        let err = result.unwrap_err();
        assert!(matches!(err, Error::Io(IoError::CopyFailed { .. })));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_remove_dir_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("hold");
        std::fs::create_dir_all(dir.join("inner")).unwrap();
        std::fs::write(dir.join("inner").join("f.txt"), "x").unwrap();

        remove_dir(&dir).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_remove_dir_missing_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = remove_dir(temp_dir.path().join("missing"));
        assert!(matches!(result, Err(Error::Io(IoError::RemoveFailed { .. }))));
    }
}
