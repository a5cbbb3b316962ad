//! Copyist CLI
//!
//! Keeps managed project files in sync with their declared transform
//! chains, driven by a `copyist.toml` manifest.

mod cli;
mod commands;
mod config;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::CheckOutcome;
use error::Result;

fn main() {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Sync { dry_run } => {
            commands::run_sync(&cli.config, dry_run)?;
            Ok(0)
        }
        Commands::Check => match commands::run_check(&cli.config)? {
            CheckOutcome::Clean => Ok(0),
            CheckOutcome::Drifted(count) => {
                eprintln!("{}: {count} file(s) out of date", "drift".red().bold());
                Ok(1)
            }
        },
        Commands::List => {
            commands::run_list()?;
            Ok(0)
        }
    }
}
