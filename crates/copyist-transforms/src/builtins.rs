//! Built-in transform registrations - single source of truth
//!
//! All listing and lookup of built-in transforms derives from this module,
//! so an identifier can never exist in one place and not the other.

use copyist_core::{Transform, TransformRegistry};

use crate::cargo::{ClippyLints, RustLints};
use crate::rustfmt::RustfmtConfig;

/// Number of built-in transforms.
pub const BUILTIN_COUNT: usize = 3;

/// Returns every built-in registration as `(identifier, transform)`.
pub fn builtin_registrations() -> Vec<(&'static str, Box<dyn Transform>)> {
    vec![
        ("rustfmt.config", Box::new(RustfmtConfig) as Box<dyn Transform>),
        ("cargo.rust-lints", Box::new(RustLints)),
        ("cargo.clippy-lints", Box::new(ClippyLints)),
    ]
}

/// A registry pre-populated with all built-in transforms.
///
/// Embedders can keep registering their own transforms on top.
pub fn builtin_registry() -> TransformRegistry {
    let mut registry = TransformRegistry::new();
    for (id, transform) in builtin_registrations() {
        registry.register(id, transform);
    }
    registry
}
