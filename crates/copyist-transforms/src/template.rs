//! Whole-file template transform.

use copyist_core::{Context, Transform, TransformError};

use crate::placeholder;

/// Replaces the whole file with an expanded template, ignoring previous
/// content.
///
/// For boilerplate the tool owns entirely; hand edits do not survive a
/// sync. Embedders construct instances with their own template text and
/// register them under identifiers of their choosing.
pub struct Template {
    template: String,
}

impl Template {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl Transform for Template {
    fn apply(&self, _previous: &str, context: &Context) -> Result<String, TransformError> {
        placeholder::expand(&self.template, context)
    }
}
