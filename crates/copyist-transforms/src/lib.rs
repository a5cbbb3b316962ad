//! Built-in transforms for Copyist
//!
//! A transform is a pure function from (previous content, context) to new
//! content; this crate ships the ones Copyist provides out of the box,
//! plus the helpers transform authors build on:
//!
//! - [`RustfmtConfig`]: a wholly-owned `rustfmt.toml`
//! - [`RustLints`] / [`ClippyLints`]: managed `[lints.*]` tables inside a
//!   hand-maintained `Cargo.toml`
//! - [`Template`]: whole-file boilerplate with `{placeholder}` expansion
//! - [`placeholder::expand`]: the shared substitution helper
//!
//! [`builtin_registry`] is the single source of truth for which dotted
//! identifiers exist.

mod builtins;
mod cargo;
pub mod placeholder;
mod rustfmt;
mod template;

pub use builtins::{BUILTIN_COUNT, builtin_registrations, builtin_registry};
pub use cargo::{ClippyLints, RustLints};
pub use rustfmt::RustfmtConfig;
pub use template::Template;
