//! Filesystem access used by both report generators

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::ListError;

/// Kind of a directory entry, resolved through symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One entry found while listing a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub is_symlink: bool,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Whether the flat lister should recurse into this entry.
    /// The tree renderer follows symlinked directories; the flat list does not.
    pub fn is_descendable(&self) -> bool {
        self.is_dir() && !self.is_symlink
    }
}

/// Source of directory listings.
pub trait DirSource {
    /// List the immediate entries of `dir` in the source's native order.
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, ListError>;

    /// Whether `path` is a directory, following symlinks.
    fn is_dir(&self, path: &Path) -> bool;
}

/// `DirSource` backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl DirSource for OsFs {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, ListError> {
        let read_dir = std::fs::read_dir(dir).map_err(|e| ListError::from_io(dir, e))?;

        let mut entries = Vec::new();
        for entry in read_dir.filter_map(|e| e.ok()) {
            let path = entry.path();
            let is_symlink = entry.file_type().map(|t| t.is_symlink()).unwrap_or(false);
            let kind = if path.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            let file_name = entry.file_name();
            if file_name.to_str().is_none() {
                warn!(
                    path = %path.display(),
                    "file name is not valid UTF-8; written with replacement characters"
                );
            }
            entries.push(Entry {
                name: file_name.to_string_lossy().to_string(),
                path,
                kind,
                is_symlink,
            });
        }
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
