//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Copyist - keep managed project files in sync with their declared
/// transform chains
#[derive(Parser, Debug)]
#[command(name = "copyist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "copyist.toml")]
    pub config: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Synchronize managed files with their transform chains
    Sync {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Verify managed files are up to date; prints a diff per drifted
    /// file and exits 1 when anything is out of date
    Check,

    /// List registered transform identifiers
    List,
}
