//! Test utilities: temporary directories and an in-memory `DirSource`.
//!
//! This module is only compiled for tests and benchmarks.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::ListError;
use crate::fs::{DirSource, Entry, EntryKind};

/// A temporary directory for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory (and its parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a fake `.git` directory with a couple of files in it.
    pub fn add_git_dir(&self) {
        self.add_file(".git/HEAD", "ref: refs/heads/main\n");
        self.add_file(".git/objects/ab/cdef", "blob");
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
enum MemNode {
    File,
    Dir,
    Denied,
    Broken(String),
}

/// In-memory `DirSource` with injectable listing failures.
///
/// Paths are stored relative to a virtual root `"."`. Listing returns
/// entries in insertion order so tests can check that callers sort.
#[derive(Debug, Clone)]
pub struct MemFs {
    nodes: BTreeMap<PathBuf, MemNode>,
    order: Vec<PathBuf>,
}

impl MemFs {
    /// The virtual root directory.
    pub const ROOT: &'static str = ".";

    pub fn new() -> Self {
        let mut fs = Self {
            nodes: BTreeMap::new(),
            order: Vec::new(),
        };
        fs.insert(PathBuf::from(Self::ROOT), MemNode::Dir);
        fs
    }

    fn insert(&mut self, path: PathBuf, node: MemNode) {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !self.nodes.contains_key(parent)
        {
            self.insert(parent.to_path_buf(), MemNode::Dir);
        }
        if !self.nodes.contains_key(&path) {
            self.order.push(path.clone());
        }
        self.nodes.insert(path, node);
    }

    fn full(path: &str) -> PathBuf {
        Path::new(Self::ROOT).join(path)
    }

    /// Add a file; parent directories are created implicitly.
    pub fn file(mut self, path: &str) -> Self {
        self.insert(Self::full(path), MemNode::File);
        self
    }

    pub fn dir(mut self, path: &str) -> Self {
        self.insert(Self::full(path), MemNode::Dir);
        self
    }

    /// Add a directory whose listing fails with permission denied.
    pub fn denied(mut self, path: &str) -> Self {
        self.insert(Self::full(path), MemNode::Denied);
        self
    }

    /// Add a directory whose listing fails with the given message.
    pub fn broken(mut self, path: &str, message: &str) -> Self {
        self.insert(Self::full(path), MemNode::Broken(message.to_string()));
        self
    }

    pub fn root(&self) -> &Path {
        Path::new(Self::ROOT)
    }
}

impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

impl DirSource for MemFs {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, ListError> {
        match self.nodes.get(dir) {
            Some(MemNode::Dir) => {}
            Some(MemNode::Denied) => {
                return Err(ListError::from_io(
                    dir,
                    io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
                ));
            }
            Some(MemNode::Broken(message)) => {
                return Err(ListError::from_io(dir, io::Error::other(message.clone())));
            }
            Some(MemNode::File) => {
                return Err(ListError::from_io(dir, io::Error::other("not a directory")));
            }
            None => {
                return Err(ListError::from_io(
                    dir,
                    io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
                ));
            }
        }

        Ok(self
            .order
            .iter()
            .filter(|p| p.parent() == Some(dir))
            .map(|p| {
                let kind = match self.nodes[p] {
                    MemNode::File => EntryKind::File,
                    _ => EntryKind::Directory,
                };
                Entry {
                    name: p
                        .file_name()
                        .map(|s| s.to_string_lossy().to_string())
                        .unwrap_or_default(),
                    path: p.clone(),
                    kind,
                    is_symlink: false,
                }
            })
            .collect())
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(
            self.nodes.get(path),
            Some(MemNode::Dir | MemNode::Denied | MemNode::Broken(_))
        )
    }
}
