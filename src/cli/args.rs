//! CLI argument definitions using clap.
//!
//! Without flags, locsync scans the source directory once, adds missing
//! translation keys to every language and normalizes all locale files.

use std::path::PathBuf;

use clap::{Args, Parser};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Watch the source directory and update translations on every change
    #[arg(short, long)]
    pub watch: bool,

    /// Remove translations that are not used anywhere in the source code
    #[arg(short, long)]
    pub remove_unused: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments overriding the configuration file.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long, env = "LOCSYNC_SOURCE_ROOT")]
    pub source_root: Option<PathBuf>,

    /// Locales directory containing one directory per language (overrides config file)
    #[arg(long, env = "LOCSYNC_LOCALES_ROOT")]
    pub locales_root: Option<PathBuf>,

    /// Print every scanned file
    #[arg(short, long)]
    pub verbose: bool,
}
