//! Error types for copyist-core

use std::path::PathBuf;

use crate::transform::TransformError;

/// Result type for copyist-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the synchronization engine
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configured identifier has no registration. Surfaced before any
    /// file is touched.
    #[error("unknown transform {id:?} (configured for {path})")]
    UnknownTransform { id: String, path: PathBuf },

    /// A transform failed while processing a file. The file is left
    /// untouched.
    #[error("transform {id:?} failed on {path}: {source}")]
    Transform {
        path: PathBuf,
        id: String,
        #[source]
        source: TransformError,
    },

    /// Filesystem error from copyist-fs
    #[error(transparent)]
    Fs(#[from] copyist_fs::Error),
}
