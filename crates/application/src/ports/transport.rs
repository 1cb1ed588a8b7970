//! HTTP transport port

use async_trait::async_trait;
use gantry_domain::{RequestDescriptor, TransportReply};
use thiserror::Error;

/// Errors raised by the transport itself.
///
/// These are connectivity-level failures only: an HTTP reply with an
/// error status is still a [`TransportReply`] and is classified by the
/// client, not the transport.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The assembled URL was not valid.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// No reply arrived within the configured timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Any other transport-level failure.
    #[error("transport error: {0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing the
/// application layer to be independent of specific HTTP libraries.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes a request and returns the raw reply.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no reply was received at all:
    /// timeout, connection failure, or a malformed URL.
    async fn execute(&self, request: &RequestDescriptor) -> Result<TransportReply, TransportError>;
}
