//! Error types for input parsing at the library boundary.
//!
//! Graph construction, traversal and synthesis are total; these errors only
//! surface when turning user-supplied text into typed values.

use thiserror::Error;

/// Errors that can occur when parsing patterns, node keys and vocabulary terms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The pattern contained no characters after trimming.
    #[error("Pattern is empty")]
    EmptyPattern,

    /// The pattern contained something other than an ASCII digit.
    #[error("Invalid character '{ch}' at position {position} in pattern")]
    InvalidDigit { ch: char, position: usize },

    /// A node key was not of the form `kind:id`.
    #[error("Malformed node key '{0}', expected 'kind:id'")]
    MalformedKey(String),

    /// Unknown node kind name.
    #[error("Unknown node kind: {0}")]
    UnknownKind(String),

    /// Unknown relationship name.
    #[error("Unknown relationship: {0}")]
    UnknownRelationship(String),

    /// Unknown element name.
    #[error("Unknown element: {0}")]
    UnknownElement(String),
}
