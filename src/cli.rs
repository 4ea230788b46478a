use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::platform::Platform;

#[derive(Parser, Debug)]
#[command(name = "modtrack")]
#[command(author, version, about = "Incremental module source tracker")]
#[command(long_about = "Tracks which module source files were added, modified or removed\n\
    since the previous scan, and maintains the resulting reload order.\n\n\
    Exit codes:\n  \
    0 - Scan completed\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading .modtrack.toml
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan source directories and update the snapshot
    Scan(ScanArgs),

    /// Show the saved snapshot: tracked files, pending reloads, ignored dirs
    Status,

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Directories to scan (default: config `dirs`, then $MODTRACK_PATH)
    pub dirs: Vec<PathBuf>,

    /// Platform determining recognized extensions and dialect
    #[arg(short, long, value_enum)]
    pub platform: Option<Platform>,

    /// Re-scan every located file regardless of timestamps
    #[arg(long)]
    pub force: bool,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Do not load or save the snapshot file
    #[arg(long)]
    pub no_state: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".modtrack.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
