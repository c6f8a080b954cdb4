// ABOUTME: Error types for the reformatter: missing structural nodes, unpaired terms, bad options.
// ABOUTME: Provides ReformatError with convenience constructors and boolean helpers.

use thiserror::Error;

/// Errors that abort a reformat run. There is no partial-success mode: any
/// of these means the document is discarded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReformatError {
    /// A required element (`body`, `head`, `ul`, `dl`, `style`) is absent.
    #[error("required <{tag}> element not found")]
    MissingNode { tag: &'static str },

    /// A `dt` is not immediately followed by a `dd` element sibling.
    #[error("entry {index} ({text:?}) has no following <dd>")]
    UnpairedTerm { index: usize, text: String },

    /// Options failed validation.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl ReformatError {
    /// Create a MissingNode error for the given tag name.
    pub fn missing(tag: &'static str) -> Self {
        ReformatError::MissingNode { tag }
    }

    /// Create an UnpairedTerm error, keeping a trimmed preview of the term text.
    pub fn unpaired(index: usize, text: impl AsRef<str>) -> Self {
        let text = text.as_ref().split_whitespace().collect::<Vec<_>>().join(" ");
        ReformatError::UnpairedTerm { index, text }
    }

    /// Create an InvalidOptions error with a custom message.
    pub fn invalid_options(msg: impl Into<String>) -> Self {
        ReformatError::InvalidOptions(msg.into())
    }

    /// Returns true if this is a MissingNode error.
    pub fn is_missing_node(&self) -> bool {
        matches!(self, ReformatError::MissingNode { .. })
    }

    /// Returns true if this is an UnpairedTerm error.
    pub fn is_unpaired_term(&self) -> bool {
        matches!(self, ReformatError::UnpairedTerm { .. })
    }

    /// Returns true if this is an InvalidOptions error.
    pub fn is_invalid_options(&self) -> bool {
        matches!(self, ReformatError::InvalidOptions(_))
    }
}
