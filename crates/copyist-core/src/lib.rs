//! Synchronization engine and transform registry for Copyist
//!
//! Copyist keeps managed project files in sync with a declarative
//! specification: each file has an ordered chain of named transforms, the
//! file's current content is folded through the chain, and the file is
//! rewritten only when the result differs from what is on disk.
//!
//! This crate is the coordination layer:
//!
//! ```text
//!              CLI / embedder
//!                    |
//!               copyist-core
//!                    |
//!          +---------+---------+
//!          |                   |
//!      copyist-fs      copyist-sections
//! ```
//!
//! - [`Context`]: read-only values shared with every transform
//! - [`Transform`]: the single capability every plugin implements
//! - [`TransformRegistry`]: explicit identifier-to-transform mapping,
//!   injected by the embedder
//! - [`SyncEngine`]: the read / fold / compare / write-if-different loop
//! - [`ChangeSet`]: which files a run actually rewrote
//!
//! # Example
//!
//! ```
//! use copyist_core::{Context, FileMap, SyncEngine, TransformError, TransformRegistry};
//!
//! let mut registry = TransformRegistry::new();
//! registry.register(
//!     "demo.greeting",
//!     Box::new(|_: &str, _: &Context| -> Result<String, TransformError> {
//!         Ok("hello\n".to_string())
//!     }),
//! );
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut files = FileMap::new();
//! files.insert(dir.path().join("greeting"), vec!["demo.greeting".into()]);
//!
//! let engine = SyncEngine::new(&registry);
//! let changed = engine.sync(&files, &Context::new()).unwrap();
//! assert_eq!(changed.len(), 1);
//!
//! // The second run is a no-op: the file is already at its fixed point.
//! let changed = engine.sync(&files, &Context::new()).unwrap();
//! assert!(changed.is_empty());
//! ```

mod context;
mod error;
mod registry;
mod sync;
mod transform;

pub use context::Context;
pub use error::{Error, Result};
pub use registry::TransformRegistry;
pub use sync::{ChangeSet, FileMap, SyncEngine, SyncOptions};
pub use transform::{Transform, TransformError};
