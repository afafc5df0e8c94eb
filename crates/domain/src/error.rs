//! Unified error type for domain operations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., incomplete setup configuration)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An id does not exist in the static catalog
    #[error("Unknown id: {0}")]
    UnknownId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_id(id: impl Into<String>) -> Self {
        Self::UnknownId(id.into())
    }
}
