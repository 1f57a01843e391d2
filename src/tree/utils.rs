//! Connector glyphs, prefix bookkeeping and entry ordering

use std::cmp::Ordering;

use crate::fs::Entry;

/// Connector for an entry that has later siblings.
pub const BRANCH: &str = "├── ";
/// Connector for the last entry of a directory.
pub const LAST: &str = "└── ";
/// Prefix extension below a non-last entry.
pub const PIPE: &str = "│   ";
/// Prefix extension below the last entry.
pub const BLANK: &str = "    ";

pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST } else { BRANCH }
}

/// Calculate the prefix handed to the children of an entry.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, BLANK)
    } else {
        format!("{}{}", current_prefix, PIPE)
    }
}

fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    (!a.is_dir(), &a.name).cmp(&(!b.is_dir(), &b.name))
}

/// Sort directories before files, then by name.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_entries);
}
