//! Flat file list: one root-relative path per line

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::config::ReportConfig;
use crate::fs::DirSource;

/// Lists every regular file below a root.
///
/// Paths are written in walk order, which is whatever order the source
/// lists entries in. Files of a directory come before its subdirectories.
pub struct FlatLister<'a, S: DirSource> {
    source: &'a S,
    config: &'a ReportConfig,
}

impl<'a, S: DirSource> FlatLister<'a, S> {
    pub fn new(source: &'a S, config: &'a ReportConfig) -> Self {
        Self { source, config }
    }

    /// Walk `root` and call `visit` with each file's relative path.
    ///
    /// Directories that cannot be listed, including the root itself,
    /// contribute nothing. Returns the number of paths visited.
    pub fn for_each_file<F>(&self, root: &Path, mut visit: F) -> io::Result<usize>
    where
        F: FnMut(&str) -> io::Result<()>,
    {
        let mut count = 0;
        self.walk_dir(root, &mut Vec::new(), &mut visit, &mut count)?;
        Ok(count)
    }

    /// Write the list to `out`, one path per line.
    pub fn write_to<W: Write>(&self, root: &Path, out: &mut W) -> io::Result<usize> {
        self.for_each_file(root, |rel| writeln!(out, "{}", rel))
    }

    /// Collect the list into memory.
    pub fn collect(&self, root: &Path) -> Vec<String> {
        let mut paths = Vec::new();
        // The visitor never fails, so neither does the walk.
        let _ = self.for_each_file(root, |rel| {
            paths.push(rel.to_string());
            Ok(())
        });
        paths
    }

    fn walk_dir<F>(
        &self,
        dir: &Path,
        rel: &mut Vec<String>,
        visit: &mut F,
        count: &mut usize,
    ) -> io::Result<()>
    where
        F: FnMut(&str) -> io::Result<()>,
    {
        debug!(dir = %dir.display(), "listing directory");
        let entries = match self.source.list(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("skipping directory: {}", e);
                return Ok(());
            }
        };

        let (dirs, files): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .filter(|entry| !self.config.is_excluded(&entry.name))
            .partition(|entry| entry.is_dir());

        for file in &files {
            rel.push(file.name.clone());
            let line = rel.join(self.config.separator.as_str());
            rel.pop();
            visit(&line)?;
            *count += 1;
        }

        for sub in dirs.iter().filter(|d| d.is_descendable()) {
            rel.push(sub.name.clone());
            let result = self.walk_dir(&sub.path, rel, visit, count);
            rel.pop();
            result?;
        }

        Ok(())
    }
}
