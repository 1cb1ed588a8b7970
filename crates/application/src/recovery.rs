//! Auth-failure coordination.
//!
//! Feature modules issue requests in parallel, so one lost session would
//! produce a burst of 401/403 replies. The coordinator is a two-state
//! machine (Idle, Recovering) that collapses such a burst into a single
//! recovery action: clear the credential, notify once, and after a short
//! delay open the matching dialog. Failures arriving while a recovery is
//! in flight are absorbed, not queued.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use gantry_domain::{AuthChallenge, ChallengeKind, ForbiddenPolicy};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::ports::{Notifier, SessionUi, TokenStore};

/// Deduplicates concurrent authentication failures into one recovery.
pub struct AuthFailureCoordinator {
    tokens: Arc<dyn TokenStore>,
    session: Arc<dyn SessionUi>,
    notifier: Arc<dyn Notifier>,
    delay: Duration,
    policy: ForbiddenPolicy,
    recovering: Arc<AtomicBool>,
}

impl AuthFailureCoordinator {
    /// Creates a coordinator in the Idle state.
    #[must_use]
    pub fn new(
        tokens: Arc<dyn TokenStore>,
        session: Arc<dyn SessionUi>,
        notifier: Arc<dyn Notifier>,
        config: &ClientConfig,
    ) -> Self {
        Self {
            tokens,
            session,
            notifier,
            delay: config.recovery_delay,
            policy: config.forbidden_policy,
            recovering: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns true while a recovery action is in flight.
    #[must_use]
    pub fn is_recovering(&self) -> bool {
        self.recovering.load(Ordering::Acquire)
    }

    /// Handles an authentication failure and returns the error the caller
    /// should propagate.
    ///
    /// The first failure to arrive while Idle triggers the recovery:
    /// the credential is cleared immediately, the user is notified once,
    /// and the matching dialog opens after the configured delay, at which
    /// point the coordinator re-arms. Any failure arriving while
    /// Recovering is rejected without side effects.
    ///
    /// Under [`ForbiddenPolicy::Surface`], a 403 never enters recovery:
    /// it is notified and surfaced as [`ApiError::Forbidden`], leaving
    /// the session untouched.
    pub async fn handle(&self, challenge: AuthChallenge) -> ApiError {
        let message = challenge.display_message();
        let rejection = match challenge.kind {
            ChallengeKind::Unauthorized => ApiError::Unauthorized(message.clone()),
            ChallengeKind::Forbidden => ApiError::Forbidden(message.clone()),
        };

        if challenge.kind == ChallengeKind::Forbidden && self.policy == ForbiddenPolicy::Surface {
            self.notifier.error(&message);
            return rejection;
        }

        let triggered = self
            .recovering
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if !triggered {
            tracing::debug!(kind = ?challenge.kind, "auth failure absorbed, recovery in flight");
            return rejection;
        }

        tracing::info!(kind = ?challenge.kind, "auth failure triggered session recovery");
        if let Err(err) = self.tokens.clear().await {
            tracing::warn!(%err, "failed to clear stored credential");
        }
        self.notifier.error(&message);

        let session = Arc::clone(&self.session);
        let recovering = Arc::clone(&self.recovering);
        let delay = self.delay;
        let kind = challenge.kind;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match kind {
                ChallengeKind::Forbidden => session.open_init(),
                ChallengeKind::Unauthorized => session.open_login(),
            }
            recovering.store(false, Ordering::Release);
        });

        rejection
    }
}
