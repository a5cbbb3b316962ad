//! Configuration parsing for copyist.toml
//!
//! The manifest declares the shared context and the managed files with
//! their ordered transform chains:
//!
//! ```toml
//! [context]
//! edition = "2024"
//!
//! [files]
//! "rustfmt.toml" = ["rustfmt.config"]
//! "Cargo.toml" = ["cargo.rust-lints", "cargo.clippy-lints"]
//! ```
//!
//! The configuration file may itself appear under `[files]`; transforms
//! that merge sections leave the `[context]` and `[files]` tables alone.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use copyist_core::{Context, FileMap};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Parsed `copyist.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Values shared with every transform invocation
    #[serde(default)]
    pub context: BTreeMap<String, Value>,

    /// Managed files: path to ordered transform identifier list
    #[serde(default)]
    pub files: BTreeMap<PathBuf, Vec<String>>,
}

impl Manifest {
    /// Parse a manifest from TOML content.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load the manifest from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Split into the engine's inputs.
    pub fn into_parts(self) -> (FileMap, Context) {
        let context = self.context.into_iter().collect();
        (self.files, context)
    }
}
