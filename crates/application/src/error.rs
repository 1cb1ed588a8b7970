//! Application error types

use thiserror::Error;

use crate::ports::{StorageError, TransportError};

/// Errors a caller can receive from the client core.
///
/// Each variant corresponds to one class in the error taxonomy: business
/// failures carried inside an envelope, the two authentication classes,
/// connectivity failures, decode failures, storage failures and
/// export-specific failures. By the time a caller sees one of these, the
/// user has already been notified once.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-200 envelope code.
    #[error("{message}")]
    Business {
        /// The envelope code (or HTTP status when no envelope was present).
        code: i64,
        /// The user-facing message.
        message: String,
    },

    /// HTTP 401: the credential is missing, invalid or expired.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// HTTP 403: uninitialized system or insufficient privilege.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// No reply was received from the backend.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A reply body could not be decoded as expected.
    #[error("decode error: {0}")]
    Decode(String),

    /// Durable storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A file export could not be completed.
    #[error("export failed: {0}")]
    Export(String),
}

impl ApiError {
    /// Returns true for either authentication failure class.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized(_) | Self::Forbidden(_))
    }
}

/// Result type alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;
