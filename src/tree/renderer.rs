//! TreeRenderer - recursive, sorted walk that streams lines to a `TreeOutput`

use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::ReportConfig;
use crate::fs::DirSource;

use super::output::TreeOutput;
use super::utils::{child_prefix, sort_entries};

/// Counts gathered while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
    /// Directories whose contents were replaced by a diagnostic line.
    pub placeholders: usize,
}

/// Renders a directory as a tree diagram.
pub struct TreeRenderer<'a, S: DirSource> {
    source: &'a S,
    config: &'a ReportConfig,
    root_name: Option<String>,
}

impl<'a, S: DirSource> TreeRenderer<'a, S> {
    pub fn new(source: &'a S, config: &'a ReportConfig) -> Self {
        Self {
            source,
            config,
            root_name: None,
        }
    }

    /// Use `name` for the first line instead of the root's base name.
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = Some(name.into());
        self
    }

    /// Base name of the absolute form of `root`, or "" for a filesystem root.
    pub fn display_name(&self, root: &Path) -> String {
        if let Some(name) = &self.root_name {
            return name.clone();
        }
        let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        absolute
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Render the tree below `root` - returns None if `root` is not a directory.
    ///
    /// Listing failures below the root become placeholder lines; only
    /// errors from `output` abort the walk.
    pub fn render<O: TreeOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> io::Result<Option<TreeStats>> {
        if !self.source.is_dir(root) {
            return Ok(None);
        }

        output.root(&self.display_name(root))?;

        let mut stats = TreeStats::default();
        self.render_dir(root, "", output, &mut stats)?;
        Ok(Some(stats))
    }

    fn render_dir<O: TreeOutput>(
        &self,
        dir: &Path,
        prefix: &str,
        output: &mut O,
        stats: &mut TreeStats,
    ) -> io::Result<()> {
        debug!(dir = %dir.display(), "rendering directory");
        let mut entries = match self.source.list(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("{}", e);
                stats.placeholders += 1;
                return output.placeholder(&e.placeholder(), prefix);
            }
        };

        entries.retain(|entry| !self.config.is_excluded(&entry.name));
        sort_entries(&mut entries);

        let total = entries.len();
        for (index, entry) in entries.iter().enumerate() {
            let is_last = index + 1 == total;
            output.entry(&entry.name, entry.is_dir(), is_last, prefix)?;

            if !entry.is_dir() {
                stats.files += 1;
                continue;
            }
            stats.directories += 1;
            // Symlinked directories are followed; a link cycle ends once the OS
            // refuses to resolve the path and the entry turns into a file or
            // a placeholder.
            let next_prefix = child_prefix(prefix, is_last);
            self.render_dir(&entry.path, &next_prefix, output, stats)?;
        }

        Ok(())
    }
}
