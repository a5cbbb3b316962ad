//! Managed rustfmt configuration.

use copyist_core::{Context, Transform, TransformError};

/// Writes a complete `rustfmt.toml`.
///
/// The file is wholly owned: previous content is discarded. The `edition`
/// context key overrides the default when present.
#[derive(Debug, Default)]
pub struct RustfmtConfig;

impl Transform for RustfmtConfig {
    fn apply(&self, _previous: &str, context: &Context) -> Result<String, TransformError> {
        let edition = context.get_str("edition").unwrap_or("2021");
        Ok(format!(
            "# This file is managed by copyist - do not edit directly\n\
             edition = \"{edition}\"\n\
             max_width = 100\n\
             newline_style = \"Unix\"\n\
             use_field_init_shorthand = true\n"
        ))
    }
}
