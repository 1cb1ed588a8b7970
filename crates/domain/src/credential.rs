//! Bearer credential type.
//!
//! The console authenticates with a single opaque bearer token issued by
//! the backend on login or initial setup. The token is treated as a
//! secret: `Debug` output is redacted to a short preview.

use serde::{Deserialize, Serialize};

/// An opaque bearer token.
///
/// Owned exclusively by the token store; every other component borrows
/// it transiently while building a request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token for header construction.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the value of an `Authorization` header carrying this token.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Get a preview of the token (first few chars only), safe to log.
    #[must_use]
    pub fn preview(&self) -> String {
        if self.0.len() > 12 {
            format!("{}...", &self.0[..8])
        } else {
            self.0.clone()
        }
    }

    /// Returns true if the token is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Credential").field(&self.preview()).finish()
    }
}
