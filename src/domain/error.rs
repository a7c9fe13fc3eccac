//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors raised while reading attributes from an object graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{label} received unexpected message :{attribute}")]
    UnexpectedMessage { label: String, attribute: String },

    #[error("cannot read through text value at: {path}")]
    NotAnObject { path: String },

    #[error("expected text at {path}, found an object")]
    NotText { path: String },

    #[error("invalid attribute path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

impl DomainError {
    pub(crate) fn unexpected(label: impl Into<String>, attribute: &str) -> Self {
        Self::UnexpectedMessage {
            label: label.into(),
            attribute: attribute.to_string(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
