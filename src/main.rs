//! CLI entry point for dirmap

use std::io::IsTerminal;
use std::path::Path;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dirmap::{OsFs, ReportConfig, Status, write_file_list, write_tree};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirmap")]
#[command(
    about = "Write all_files.txt and directory_tree.txt for the current directory",
    long_about = "Walks the current directory (skipping .git) and writes two reports into it: \
                  all_files.txt, one relative file path per line, and directory_tree.txt, \
                  a tree diagram with directories listed before files."
)]
#[command(version)]
struct Args {
    /// Control color of progress messages: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();

    let config = ReportConfig::default();
    let root = Path::new(".");
    let mut status = Status::new(should_use_color(args.color));

    status.step("Generating file list")?;
    let files_listed = write_file_list(&OsFs, root, Path::new(&config.file_list_name), &config)
        .context("failed to generate file list")?;

    status.step("Generating directory tree")?;
    let tree = write_tree(&OsFs, root, Path::new(&config.tree_name), &config)
        .context("failed to generate directory tree")?;

    status.done()?;
    status.saved("File list", &config.file_list_name)?;
    status.saved("Directory tree", &config.tree_name)?;
    status.summary(files_listed, &tree)?;

    Ok(())
}
