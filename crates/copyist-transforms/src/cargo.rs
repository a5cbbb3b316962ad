//! Managed lint tables for Cargo manifests.
//!
//! Each transform owns exactly one `[lints.*]` table inside `Cargo.toml`,
//! replacing it in place and leaving the rest of the manifest alone.

use copyist_core::{Context, Transform, TransformError};
use copyist_sections::fill_section;

/// Comment placed at the top of every managed table.
const MANAGED_MARKER: &str = "# This table is managed by copyist - do not edit directly";

/// Fills the `[lints.rust]` table.
#[derive(Debug, Default)]
pub struct RustLints;

impl Transform for RustLints {
    fn apply(&self, previous: &str, _context: &Context) -> Result<String, TransformError> {
        let text = format!(
            "[lints.rust]\n\
             {MANAGED_MARKER}\n\
             unsafe_code = \"deny\"\n\
             unused_must_use = \"deny\"\n\
             missing_docs = \"warn\"\n"
        );
        Ok(fill_section(previous, "lints.rust", &text)?)
    }
}

/// Fills the `[lints.clippy]` table.
#[derive(Debug, Default)]
pub struct ClippyLints;

impl Transform for ClippyLints {
    fn apply(&self, previous: &str, _context: &Context) -> Result<String, TransformError> {
        let text = format!(
            "[lints.clippy]\n\
             {MANAGED_MARKER}\n\
             all = \"warn\"\n\
             dbg_macro = \"deny\"\n\
             todo = \"warn\"\n\
             unwrap_used = \"warn\"\n"
        );
        Ok(fill_section(previous, "lints.clippy", &text)?)
    }
}
