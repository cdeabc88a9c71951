//! Error types for eql-core.
//!
//! A single taxonomy covering everything a caller can see: malformed query
//! text, unresolvable enum constants, unresolvable target entities and
//! invalid caller-supplied arguments.

use thiserror::Error;

/// EQL error type
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Syntax error: {0}")]
    SyntaxError(String),

    #[error("Enum resolution error: {0}")]
    EnumResolutionError(String),

    #[error("Missing entity: {0}")]
    MissingEntityError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),
}

/// Result type for EQL operations
pub type QueryResult<T> = Result<T, QueryError>;

impl serde::Serialize for QueryError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
