//! Directory tree diagram
//!
//! The tree report is produced in two halves, mirroring a streaming tree
//! printer:
//!
//! - `TreeRenderer` walks the directory, sorting and filtering entries
//! - `TreeOutput` receives one call per line; `TextTreeWriter` turns those
//!   calls into connector-decorated text
//!
//! Nothing is buffered: each line is emitted as soon as its entry is seen,
//! so memory use is O(depth).

mod output;
mod renderer;
mod utils;

pub use output::{TextTreeWriter, TreeOutput};
pub use renderer::{TreeRenderer, TreeStats};
pub use utils::{BLANK, BRANCH, LAST, PIPE, child_prefix, connector, sort_entries};
