//! Backend response envelope.
//!
//! Every structured reply from the backend wraps its payload in a fixed
//! envelope: `{ code, message, data }`. A `code` of 200 is the only
//! success sentinel; any other code is a business-level failure whose
//! `message` (optionally suffixed with `data` as diagnostic detail) is
//! shown to the user. Callers never see the wrapper itself.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// The envelope code denoting success.
pub const SUCCESS_CODE: i64 = 200;

/// The fixed response envelope shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope {
    /// Business status code; `200` means success.
    pub code: i64,
    /// Human-readable message, meaningful on failure.
    #[serde(default)]
    pub message: String,
    /// Payload on success, optional diagnostic detail on failure.
    #[serde(default)]
    pub data: Value,
}

impl ResponseEnvelope {
    /// Parses an envelope from raw body bytes.
    ///
    /// This doubles as the blob-vs-JSON sniff: binary replies that fail to
    /// parse here are genuine file content.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedEnvelope`] if the bytes are not a
    /// JSON object carrying an integer `code`.
    pub fn parse(bytes: &[u8]) -> DomainResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| DomainError::MalformedEnvelope(e.to_string()))
    }

    /// Returns true if the envelope denotes success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Builds the user-facing failure message: `message`, suffixed with
    /// `data` when the backend attached detail. `None` when the envelope
    /// carries no displayable text at all.
    #[must_use]
    pub fn display_message(&self) -> Option<String> {
        let detail = match &self.data {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        };
        match (self.message.is_empty(), detail) {
            (true, None) => None,
            (false, None) => Some(self.message.clone()),
            (true, Some(detail)) => Some(detail),
            (false, Some(detail)) => Some(format!("{}: {detail}", self.message)),
        }
    }

    /// Unwraps the envelope: the payload on success, a rejection carrying
    /// the user-facing message otherwise.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvelopeRejection`] when `code != 200`.
    pub fn into_data(self) -> Result<Value, EnvelopeRejection> {
        if self.is_success() {
            Ok(self.data)
        } else {
            let message = self.display_message();
            Err(EnvelopeRejection {
                code: self.code,
                message,
            })
        }
    }
}

/// A business-level failure extracted from an envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeRejection {
    /// The non-200 envelope code.
    pub code: i64,
    /// The user-facing message, if the backend provided one.
    pub message: Option<String>,
}

impl EnvelopeRejection {
    /// Returns the message, or the given fallback when the backend sent none.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}
