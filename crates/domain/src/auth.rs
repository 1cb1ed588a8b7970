//! Authentication failure types.
//!
//! A 401 or 403 reply from the backend is an [`AuthChallenge`]. The two
//! classes stay distinct all the way to the caller; what a 403 *triggers*
//! is a matter of [`ForbiddenPolicy`], since the backend uses it both for
//! "system not initialized" and for ordinary permission failures.

use serde::{Deserialize, Serialize};

use crate::envelope::ResponseEnvelope;
use crate::reply::TransportReply;

/// Classification of an authentication failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeKind {
    /// HTTP 401: the credential is missing, invalid or expired.
    Unauthorized,
    /// HTTP 403: the system is uninitialized or the caller lacks privilege.
    Forbidden,
}

impl ChallengeKind {
    /// Maps an HTTP status to a challenge kind, if it is one.
    #[must_use]
    pub const fn from_status(status: u16) -> Option<Self> {
        match status {
            401 => Some(Self::Unauthorized),
            403 => Some(Self::Forbidden),
            _ => None,
        }
    }

    /// Fallback notification text when the reply body carried no message.
    #[must_use]
    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
        }
    }
}

/// An authentication failure extracted from a transport reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthChallenge {
    /// The failure class.
    pub kind: ChallengeKind,
    /// Message sniffed from the reply body, when it parsed as an envelope.
    pub message: Option<String>,
}

impl AuthChallenge {
    /// Creates a challenge with an optional body-provided message.
    #[must_use]
    pub const fn new(kind: ChallengeKind, message: Option<String>) -> Self {
        Self { kind, message }
    }

    /// Builds a challenge from a 401/403 reply, sniffing the body for an
    /// envelope message. Blob-typed error bodies are covered too, since
    /// the sniff works on raw bytes.
    ///
    /// Returns `None` for any other status.
    #[must_use]
    pub fn from_reply(reply: &TransportReply) -> Option<Self> {
        let kind = ChallengeKind::from_status(reply.status)?;
        let message = ResponseEnvelope::parse(&reply.body)
            .ok()
            .and_then(|envelope| envelope.display_message());
        Some(Self { kind, message })
    }

    /// The user-facing notification text for this failure.
    #[must_use]
    pub fn display_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| self.kind.default_message().to_string())
    }
}

/// What a 403 reply should trigger.
///
/// The backend is ambiguous about 403: it can mean "not initialized yet"
/// or plain "insufficient privilege". The policy is configured rather
/// than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ForbiddenPolicy {
    /// Treat every 403 as "system not initialized": clear the credential
    /// and open the initialization dialog.
    #[default]
    Reinitialize,
    /// Treat 403 as an ordinary permission failure: notify and reject,
    /// leaving the session untouched.
    Surface,
}
