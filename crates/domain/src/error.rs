//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A response body could not be interpreted as an envelope.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// An inline export payload is missing fields or not valid base64.
    #[error("invalid export payload: {0}")]
    InvalidExportPayload(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
