//! The transform capability
//!
//! Every plugin, whatever document format it manipulates internally, is
//! the same thing to the engine: a pure function from (previous content,
//! context) to new content.

use crate::context::Context;

/// Errors a transform can signal.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// A context key the transform depends on is absent.
    #[error("missing context key {key:?}")]
    MissingContext { key: String },

    /// A context key is present but holds the wrong kind of value.
    #[error("context key {key:?} is not a {expected}")]
    ContextType { key: String, expected: &'static str },

    /// The existing content is not in the shape the transform expects.
    #[error(transparent)]
    Section(#[from] copyist_sections::Error),

    /// Transform-specific failure.
    #[error("{0}")]
    Other(String),
}

/// A pure function from (previous content, context) to new content.
///
/// Transforms are the unit of composition in a file's chain. They must be
/// deterministic in their two inputs, and applying one to content it has
/// already produced must return that content unchanged, so that a second
/// sync run reports no changes.
pub trait Transform: Send + Sync {
    fn apply(&self, previous: &str, context: &Context) -> Result<String, TransformError>;
}

/// Plain functions and closures of the right shape are transforms, which
/// keeps tests and embedders free of wrapper types.
impl<F> Transform for F
where
    F: Fn(&str, &Context) -> Result<String, TransformError> + Send + Sync,
{
    fn apply(&self, previous: &str, context: &Context) -> Result<String, TransformError> {
        self(previous, context)
    }
}
