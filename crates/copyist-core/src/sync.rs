//! The synchronization engine
//!
//! For each declared file the engine reads the current content (a missing
//! file starts from the empty string), folds the file's transform chain
//! over it left to right, and rewrites the file only when the result
//! differs from what is on disk. Files whose recomputed content is
//! byte-identical are never written, so repeated runs cause no timestamp
//! or metadata churn.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::context::Context;
use crate::error::{Error, Result};
use crate::registry::TransformRegistry;
use crate::transform::Transform;

/// Mapping from managed file path to its ordered transform identifiers.
/// The identifier order is the left-to-right fold order.
pub type FileMap = BTreeMap<PathBuf, Vec<String>>;

/// Paths rewritten during a run because their computed content differed
/// from what was on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    changed: BTreeSet<PathBuf>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changed.len()
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.changed.contains(path.as_ref())
    }

    /// Iterate over changed paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.changed.iter().map(PathBuf::as_path)
    }

    fn insert(&mut self, path: PathBuf) {
        self.changed.insert(path);
    }
}

impl IntoIterator for ChangeSet {
    type Item = PathBuf;
    type IntoIter = std::collections::btree_set::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.changed.into_iter()
    }
}

impl FromIterator<PathBuf> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self {
            changed: iter.into_iter().collect(),
        }
    }
}

/// Options for a sync run
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Compute the ChangeSet without writing anything back.
    pub dry_run: bool,
}

/// Engine for synchronizing managed files with their transform chains.
///
/// The engine is synchronous and single-threaded: files are processed
/// sequentially in map order, and within one file the chain is strictly
/// sequential. Precondition: the managed files are not concurrently
/// mutated by other processes during a run.
pub struct SyncEngine<'r> {
    registry: &'r TransformRegistry,
    options: SyncOptions,
}

impl<'r> SyncEngine<'r> {
    /// Create an engine with default options.
    pub fn new(registry: &'r TransformRegistry) -> Self {
        Self::with_options(registry, SyncOptions::default())
    }

    /// Create an engine with explicit options.
    pub fn with_options(registry: &'r TransformRegistry, options: SyncOptions) -> Self {
        Self { registry, options }
    }

    /// Synchronize every file in `files`, sharing `context` with each
    /// transform invocation unchanged.
    ///
    /// Every identifier in every chain is resolved up front, so an
    /// unknown transform aborts the run before any file is read or
    /// written. The run aborts on the first transform or I/O failure:
    /// files earlier in the iteration keep their completed writes, while
    /// the offending file is left untouched, because a write only happens
    /// after its whole chain has succeeded and is atomic.
    ///
    /// Returns the set of paths actually rewritten. When every file is
    /// already at the fixed point of its chain, the set is empty.
    pub fn sync(&self, files: &FileMap, context: &Context) -> Result<ChangeSet> {
        let mut chains = Vec::with_capacity(files.len());
        for (path, ids) in files {
            chains.push((path.as_path(), self.resolve_chain(path, ids)?));
        }

        let mut changed = ChangeSet::default();
        for (path, chain) in chains {
            let previous = copyist_fs::read_text_or_empty(path)?;
            let next = apply_chain(path, &chain, &previous, context)?;

            if next == previous {
                debug!(path = %path.display(), "up to date");
                continue;
            }

            if self.options.dry_run {
                debug!(path = %path.display(), "out of date (dry run)");
            } else {
                copyist_fs::write_atomic(path, next.as_bytes())?;
                info!(path = %path.display(), "rewrote managed file");
            }
            changed.insert(path.to_path_buf());
        }

        Ok(changed)
    }

    /// Compute the chain output for one file without touching the file.
    pub fn render(&self, path: &Path, ids: &[String], context: &Context) -> Result<String> {
        let chain = self.resolve_chain(path, ids)?;
        let previous = copyist_fs::read_text_or_empty(path)?;
        apply_chain(path, &chain, &previous, context)
    }

    fn resolve_chain<'i>(
        &self,
        path: &Path,
        ids: &'i [String],
    ) -> Result<Vec<(&'i str, &'r dyn Transform)>> {
        ids.iter()
            .map(|id| {
                self.registry
                    .resolve(id)
                    .map(|transform| (id.as_str(), transform))
                    .ok_or_else(|| Error::UnknownTransform {
                        id: id.clone(),
                        path: path.to_path_buf(),
                    })
            })
            .collect()
    }
}

/// Fold the chain over the previous content, left to right.
fn apply_chain(
    path: &Path,
    chain: &[(&str, &dyn Transform)],
    previous: &str,
    context: &Context,
) -> Result<String> {
    let mut content = previous.to_string();
    for (id, transform) in chain {
        content = transform
            .apply(&content, context)
            .map_err(|source| Error::Transform {
                path: path.to_path_buf(),
                id: (*id).to_string(),
                source,
            })?;
    }
    Ok(content)
}
