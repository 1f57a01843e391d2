//! Line sinks for the tree renderer

use std::io::{self, Write};

use super::utils::{LAST, connector};

/// Callback for tree output - receives one call per rendered line.
pub trait TreeOutput {
    /// The first line, naming the root directory.
    fn root(&mut self, name: &str) -> io::Result<()>;

    /// One entry of a directory listing.
    fn entry(&mut self, name: &str, is_dir: bool, is_last: bool, prefix: &str) -> io::Result<()>;

    /// Stand-in for the children of a directory that could not be listed.
    /// `prefix` is the prefix the children would have been drawn with.
    fn placeholder(&mut self, text: &str, prefix: &str) -> io::Result<()>;
}

/// Writes the tree as plain text, one line per call.
pub struct TextTreeWriter<W: Write> {
    out: W,
}

impl<W: Write> TextTreeWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TreeOutput for TextTreeWriter<W> {
    fn root(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "{}/", name)
    }

    fn entry(&mut self, name: &str, is_dir: bool, is_last: bool, prefix: &str) -> io::Result<()> {
        let marker = if is_dir { "/" } else { "" };
        writeln!(self.out, "{}{}{}{}", prefix, connector(is_last), name, marker)
    }

    fn placeholder(&mut self, text: &str, prefix: &str) -> io::Result<()> {
        writeln!(self.out, "{}{}{}", prefix, LAST, text)
    }
}
