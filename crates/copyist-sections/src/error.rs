//! Error types for copyist-sections

/// Result type for copyist-sections operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating or merging sections
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A line opens a table header but never closes it, or carries junk
    /// after the closing bracket.
    #[error("malformed table header at line {line}: {text:?}")]
    MalformedHeader { line: usize, text: String },

    /// The replacement text does not start with the header of the section
    /// it is meant to fill.
    #[error("section text for {name:?} must start with its own table header")]
    HeaderMismatch { name: String },

    /// The replacement text contains a second table header, which would
    /// split the managed span on the next run.
    #[error("section text for {name:?} contains more than one table header")]
    ExtraHeader { name: String },
}
