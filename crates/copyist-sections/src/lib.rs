//! Structured-section location and merge for Copyist
//!
//! Transforms that own one table inside a larger configuration file (one
//! `[lints.clippy]` table inside a hand-maintained `Cargo.toml`, say) use
//! [`fill_section`] to replace or append exactly that table while leaving
//! every other section, comment, and blank line byte for byte alone.
//!
//! The document model is deliberately shallow: lines whose first
//! non-whitespace character is `[` are table headers, a section runs from
//! its header to the line before the next header, and nothing else about
//! the format is interpreted. Malformed headers are reported as errors
//! instead of producing a corrupted document.
//!
//! By convention the section text passed in carries a comment line marking
//! it as tool-managed; the primitive itself does not enforce that.

mod error;
mod merge;
mod parser;

pub use error::{Error, Result};
pub use merge::fill_section;
pub use parser::{Section, find_section, has_section, parse_sections};
