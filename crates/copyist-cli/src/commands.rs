//! Command implementations for the copyist binary.

use std::path::Path;

use colored::Colorize;
use copyist_core::{SyncEngine, SyncOptions};
use copyist_transforms::builtin_registry;
use similar::TextDiff;

use crate::config::Manifest;
use crate::error::Result;

/// Outcome of `copyist check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every managed file is at the fixed point of its chain.
    Clean,
    /// This many files would change.
    Drifted(usize),
}

/// Run `copyist sync`.
pub fn run_sync(config: &Path, dry_run: bool) -> Result<()> {
    let manifest = Manifest::load(config)?;
    let (files, context) = manifest.into_parts();

    let registry = builtin_registry();
    let engine = SyncEngine::with_options(&registry, SyncOptions { dry_run });
    let changed = engine.sync(&files, &context)?;

    if changed.is_empty() {
        println!("{} everything up to date", "ok".green().bold());
    } else {
        let verb = if dry_run { "would rewrite" } else { "rewrote" };
        for path in changed.iter() {
            println!("{} {}", verb.yellow(), path.display());
        }
    }
    Ok(())
}

/// Run `copyist check`: render every chain without writing and diff
/// against what is on disk.
pub fn run_check(config: &Path) -> Result<CheckOutcome> {
    let manifest = Manifest::load(config)?;
    let (files, context) = manifest.into_parts();

    let registry = builtin_registry();
    let engine = SyncEngine::new(&registry);

    let mut drifted = 0;
    for (path, ids) in &files {
        let on_disk = copyist_fs::read_text_or_empty(path)?;
        let expected = engine.render(path, ids, &context)?;
        if expected == on_disk {
            continue;
        }

        drifted += 1;
        println!("{} {}", "out of date".red().bold(), path.display());
        let diff = TextDiff::from_lines(&on_disk, &expected);
        print!("{}", diff.unified_diff().header("on disk", "expected"));
    }

    if drifted == 0 {
        println!("{} everything up to date", "ok".green().bold());
        Ok(CheckOutcome::Clean)
    } else {
        Ok(CheckOutcome::Drifted(drifted))
    }
}

/// Run `copyist list`.
pub fn run_list() -> Result<()> {
    let registry = builtin_registry();
    for id in registry.list() {
        println!("{id}");
    }
    Ok(())
}
