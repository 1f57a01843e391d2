//! Report configuration

use std::collections::BTreeSet;

/// Directory name skipped by both reports unless configured otherwise.
pub const DEFAULT_EXCLUDED: &str = ".git";

/// Default name of the flat file list.
pub const FILE_LIST_NAME: &str = "all_files.txt";

/// Default name of the tree diagram.
pub const TREE_NAME: &str = "directory_tree.txt";

/// Path separator used by the flat file list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Separator {
    /// The platform separator (`\` on Windows, `/` elsewhere)
    #[default]
    Native,
    /// Always `/`
    Slash,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Native => std::path::MAIN_SEPARATOR_STR,
            Separator::Slash => "/",
        }
    }
}

/// Configuration shared by the flat lister and the tree renderer.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Entry names that are neither listed nor descended into.
    pub excluded: BTreeSet<String>,
    pub separator: Separator,
    pub file_list_name: String,
    pub tree_name: String,
}

impl ReportConfig {
    /// Replace the excluded name set.
    pub fn with_excluded<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            excluded: BTreeSet::from([DEFAULT_EXCLUDED.to_string()]),
            separator: Separator::default(),
            file_list_name: FILE_LIST_NAME.to_string(),
            tree_name: TREE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_excludes_git_only() {
        let config = ReportConfig::default();
        assert!(config.is_excluded(".git"));
        assert!(!config.is_excluded("git"));
        assert!(!config.is_excluded(".github"));
    }

    #[test]
    fn test_with_excluded_replaces_set() {
        let config = ReportConfig::default().with_excluded(["target", ".hg"]);
        assert!(config.is_excluded("target"));
        assert!(config.is_excluded(".hg"));
        assert!(!config.is_excluded(".git"));
    }

    #[test]
    fn test_slash_separator() {
        assert_eq!(Separator::Slash.as_str(), "/");
    }
}
