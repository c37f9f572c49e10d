//! Upload storage
//!
//! [`FileStore`] is the seam the form layer saves uploads through;
//! [`LocalFileStore`] keeps them under one directory on disk.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StorageError;

/// Where uploaded files are kept.
pub trait FileStore: Send + Sync {
    /// Saves `content` under a name derived from `name` and returns the full
    /// path it was written to. An existing file is never overwritten.
    fn save_upload(&self, name: &str, content: &[u8]) -> Result<PathBuf, StorageError>;

    /// Deletes a stored file. Returns `false` instead of failing when the
    /// file cannot be removed.
    fn delete(&self, path: &Path) -> bool;
}

/// Files under a root directory.
///
/// Upload names are reduced to their last component, so `../../etc/passwd`
/// is stored as `passwd` inside the root. A taken name gets a numeric
/// suffix before the extension: `report.pdf`, `report_1.pdf`, ...
///
/// # Examples
///
/// ```no_run
/// use toolbox_storage::{FileStore, LocalFileStore};
///
/// let store = LocalFileStore::new("/var/app/media");
/// let path = store.save_upload("avatar.png", b"...")?;
/// assert!(store.delete(&path));
/// # Ok::<(), toolbox_storage::StorageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    /// Stores files under `root`, creating it on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a relative path under the root; absolute paths are kept.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn candidate(file_name: &Path, attempt: usize) -> PathBuf {
        if attempt == 0 {
            return file_name.to_path_buf();
        }

        let stem = file_name.file_stem().unwrap_or(file_name.as_os_str());
        let mut name = stem.to_os_string();
        name.push(format!("_{attempt}"));
        if let Some(extension) = file_name.extension() {
            name.push(".");
            name.push(extension);
        }
        PathBuf::from(name)
    }
}

impl FileStore for LocalFileStore {
    fn save_upload(&self, name: &str, content: &[u8]) -> Result<PathBuf, StorageError> {
        let file_name = Path::new(name)
            .file_name()
            .map(Path::new)
            .ok_or_else(|| StorageError::InvalidName {
                name: name.to_owned(),
            })?;

        fs::create_dir_all(&self.root).map_err(|e| StorageError::io(&self.root, e))?;

        let mut attempt = 0;
        loop {
            let path = self.root.join(Self::candidate(file_name, attempt));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(content).map_err(|e| StorageError::io(&path, e))?;
                    debug!(path = %path.display(), bytes = content.len(), "upload saved");
                    return Ok(path);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(StorageError::io(path, e)),
            }
        }
    }

    fn delete(&self, path: &Path) -> bool {
        let path = self.resolve(path);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "file deleted");
                true
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "file not deleted");
                false
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn store() -> (tempfile::TempDir, LocalFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path().join("media"));
        (dir, store)
    }

    #[test]
    fn test_save_writes_under_root() {
        let (_dir, store) = store();
        let path = store.save_upload("notes.txt", b"hello").unwrap();

        assert_eq!(path, store.root().join("notes.txt"));
        assert_eq!(fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn test_save_never_overwrites() {
        let (_dir, store) = store();
        let first = store.save_upload("report.pdf", b"1").unwrap();
        let second = store.save_upload("report.pdf", b"2").unwrap();
        let third = store.save_upload("report.pdf", b"3").unwrap();

        assert_eq!(first.file_name().unwrap(), "report.pdf");
        assert_eq!(second.file_name().unwrap(), "report_1.pdf");
        assert_eq!(third.file_name().unwrap(), "report_2.pdf");
        assert_eq!(fs::read(&first).unwrap(), b"1");
    }

    #[test]
    fn test_suffix_without_extension() {
        let (_dir, store) = store();
        store.save_upload("README", b"").unwrap();
        let second = store.save_upload("README", b"").unwrap();
        assert_eq!(second.file_name().unwrap(), "README_1");
    }

    #[rstest]
    #[case("../../etc/passwd", "passwd")]
    #[case("/abs/path/photo.jpg", "photo.jpg")]
    #[case("dir/sub/a.b.c", "a.b.c")]
    fn test_names_are_reduced_to_last_component(#[case] name: &str, #[case] stored: &str) {
        let (_dir, store) = store();
        let path = store.save_upload(name, b"x").unwrap();
        assert_eq!(path, store.root().join(stored));
    }

    #[rstest]
    #[case("")]
    #[case("..")]
    #[case("/")]
    fn test_names_without_file_component_are_rejected(#[case] name: &str) {
        let (_dir, store) = store();
        let err = store.save_upload(name, b"x").unwrap_err();
        assert!(matches!(err, StorageError::InvalidName { .. }));
    }

    #[test]
    fn test_delete_relative_and_absolute() {
        let (_dir, store) = store();
        let absolute = store.save_upload("a.txt", b"").unwrap();
        store.save_upload("b.txt", b"").unwrap();

        assert!(store.delete(&absolute));
        assert!(store.delete(Path::new("b.txt")));
        assert!(!absolute.exists());
        assert!(!store.root().join("b.txt").exists());
    }

    #[test]
    fn test_delete_missing_reports_false() {
        let (_dir, store) = store();
        assert!(!store.delete(Path::new("missing.txt")));
    }
}
