//! Writing the two reports to disk

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::flat::FlatLister;
use crate::fs::DirSource;
use crate::tree::{TextTreeWriter, TreeRenderer, TreeStats};

fn create(dest: &Path) -> Result<BufWriter<File>, ReportError> {
    File::create(dest)
        .map(BufWriter::new)
        .map_err(|source| ReportError::Create {
            path: dest.to_path_buf(),
            source,
        })
}

fn write_error(dest: &Path) -> impl FnOnce(io::Error) -> ReportError + '_ {
    move |source| ReportError::Write {
        path: dest.to_path_buf(),
        source,
    }
}

/// Write the flat file list of `root` to `dest`, overwriting it.
pub fn write_file_list<S: DirSource>(
    source: &S,
    root: &Path,
    dest: &Path,
    config: &ReportConfig,
) -> Result<usize, ReportError> {
    let mut out = create(dest)?;
    let count = FlatLister::new(source, config)
        .write_to(root, &mut out)
        .map_err(write_error(dest))?;
    out.flush().map_err(write_error(dest))?;

    info!(count, path = %dest.display(), "file list written");
    Ok(count)
}

/// Write the tree diagram of `root` to `dest`, overwriting it.
///
/// Fails without touching `dest` if `root` is not a directory.
pub fn write_tree<S: DirSource>(
    source: &S,
    root: &Path,
    dest: &Path,
    config: &ReportConfig,
) -> Result<TreeStats, ReportError> {
    let invalid_root = || ReportError::InvalidRoot {
        path: root.to_path_buf(),
    };
    if !source.is_dir(root) {
        return Err(invalid_root());
    }

    let mut writer = TextTreeWriter::new(create(dest)?);
    let stats = TreeRenderer::new(source, config)
        .render(root, &mut writer)
        .map_err(write_error(dest))?
        .ok_or_else(invalid_root)?;
    writer.into_inner().flush().map_err(write_error(dest))?;

    info!(
        directories = stats.directories,
        files = stats.files,
        placeholders = stats.placeholders,
        path = %dest.display(),
        "directory tree written"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::config::{FILE_LIST_NAME, Separator, TREE_NAME};
    use crate::fs::OsFs;
    use crate::test_utils::TestDir;

    /// Write both reports for `root` into `out_dir`, file list first.
    fn write_both(root: &Path, out_dir: &Path, config: &ReportConfig) -> (usize, TreeStats) {
        let listed =
            write_file_list(&OsFs, root, &out_dir.join(&config.file_list_name), config).unwrap();
        let stats = write_tree(&OsFs, root, &out_dir.join(&config.tree_name), config).unwrap();
        (listed, stats)
    }

    #[test]
    fn test_reports_into_separate_dir() {
        let src = TestDir::new();
        src.add_file("a/f.txt", "");
        src.add_file("b.txt", "");
        let out = TestDir::new();

        let config = ReportConfig::default().with_separator(Separator::Slash);
        let (listed, stats) = write_both(src.path(), out.path(), &config);
        assert_eq!(listed, 2);
        assert_eq!(stats.directories, 1);
        assert_eq!(stats.files, 2);

        let list = fs::read_to_string(out.path().join(FILE_LIST_NAME)).unwrap();
        let mut lines: Vec<_> = list.lines().collect();
        lines.sort();
        assert_eq!(lines, vec!["a/f.txt", "b.txt"]);

        let tree = fs::read_to_string(out.path().join(TREE_NAME)).unwrap();
        let root = src.path().file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(tree, format!("{}/\n├── a/\n│   └── f.txt\n└── b.txt\n", root));
    }

    #[test]
    fn test_existing_reports_are_overwritten() {
        let src = TestDir::new();
        let out = TestDir::new();
        out.add_file(FILE_LIST_NAME, "stale\nstale\nstale\n");
        out.add_file(TREE_NAME, "stale\n");

        write_both(src.path(), out.path(), &ReportConfig::default());

        assert_eq!(fs::read_to_string(out.path().join(FILE_LIST_NAME)).unwrap(), "");
        let tree = fs::read_to_string(out.path().join(TREE_NAME)).unwrap();
        assert_eq!(tree.lines().count(), 1);
        assert!(tree.ends_with("/\n"));
    }

    #[test]
    fn test_invalid_root_does_not_create_tree() {
        let out = TestDir::new();
        let missing = out.path().join("missing");
        let dest = out.path().join(TREE_NAME);

        let err = write_tree(&OsFs, &missing, &dest, &ReportConfig::default()).unwrap_err();
        assert!(matches!(err, ReportError::InvalidRoot { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn test_uncreatable_destination() {
        let src = TestDir::new();
        let dest = src.path().join("no/such/dir").join(FILE_LIST_NAME);

        let err = write_file_list(&OsFs, src.path(), &dest, &ReportConfig::default()).unwrap_err();
        assert!(matches!(err, ReportError::Create { .. }));
    }
}
