//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Navigation and property lookup failures on a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("no child with property '{property}' equal to '{value}'")]
    NoMatchingChild { property: String, value: String },

    #[error("index out of range: {index} (node has {count} children)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("property not found: {0}")]
    PropertyNotFound(String),

    #[error("node handle does not belong to this document")]
    StaleHandle,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
