//! Error types for the copyist CLI

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the user
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("failed to parse {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Core(#[from] copyist_core::Error),

    #[error(transparent)]
    Fs(#[from] copyist_fs::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
