//! Console progress messages

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeStats;

/// Human-readable progress printer for stdout.
pub struct Status {
    stdout: StandardStream,
}

impl Status {
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    /// Announce a step that is about to start.
    pub fn step(&mut self, message: &str) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(self.stdout, "{}...", message)?;
        self.stdout.reset()
    }

    pub fn done(&mut self) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        writeln!(self.stdout, "Done!")?;
        self.stdout.reset()
    }

    /// Report where a file was written.
    pub fn saved(&mut self, label: &str, path: &str) -> io::Result<()> {
        write!(self.stdout, "{} saved to: ", label)?;
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        writeln!(self.stdout, "{}", path)?;
        self.stdout.reset()
    }

    pub fn summary(&mut self, files_listed: usize, tree: &TreeStats) -> io::Result<()> {
        writeln!(self.stdout)?;
        writeln!(self.stdout, "{}", summary_line(files_listed, tree))
    }
}

/// One-line summary of a run, in `tree` style.
pub fn summary_line(files_listed: usize, tree: &TreeStats) -> String {
    let mut line = format!(
        "{} files listed; {} directories, {} files",
        files_listed, tree.directories, tree.files
    );
    if tree.placeholders > 0 {
        line.push_str(&format!(", {} unreadable", tree.placeholders));
    }
    line
}
