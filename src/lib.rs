//! dirmap - write a flat file list and a tree diagram of a directory

pub mod config;
pub mod error;
pub mod flat;
pub mod fs;
pub mod report;
pub mod status;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{FILE_LIST_NAME, ReportConfig, Separator, TREE_NAME};
pub use error::{ListError, ReportError};
pub use flat::FlatLister;
pub use fs::{DirSource, Entry, EntryKind, OsFs};
pub use report::{write_file_list, write_tree};
pub use status::Status;
pub use tree::{TextTreeWriter, TreeOutput, TreeRenderer, TreeStats};
