//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures (validation, bad
/// identifiers). The catalog, filter, and matcher paths are total functions
/// and never produce one of these at runtime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an out-of-set page name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. session id parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// Serializing a result for delivery failed (e.g. CSV writer).
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
