//! Error types for path rule checking

use thiserror::Error;

/// The first rule broken by a path string.
///
/// Exactly one violation is reported per [`validate`](crate::validate) call,
/// in the fixed check order documented there. Each variant carries enough
/// information to drive a single repair without re-scanning the string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The path string has no characters
    #[error("path string is empty")]
    Empty,

    /// The path exceeds the flavor's maximum length; carries the byte limit
    #[error("path exceeds the maximum length of {limit} bytes")]
    TooLong { limit: usize },

    /// A disallowed character at the given byte offset in the original string
    #[error("invalid character at byte offset {offset}")]
    InvalidChar { offset: usize },

    /// A path segment exactly matches a forbidden name
    #[error("path segment uses the reserved name `{name}`")]
    ReservedName { name: String },
}

/// The error type for rule-set construction.
///
/// Malformed rule sets are a caller mistake, not a path problem, so they use
/// a separate channel from [`Violation`]. [`validate`](crate::validate) and
/// [`correct`](crate::correct) never produce this error.
#[derive(Error, Debug)]
pub enum RuleError {
    /// A separator, drive-prefix, or invalid-character pattern failed to compile
    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),
}
