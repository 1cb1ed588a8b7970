//! Tracing-backed notification sink.

use gantry_application::ports::Notifier;

/// Notification sink that routes messages through `tracing`.
///
/// Used whenever no UI notification system is attached: headless runs,
/// the bootstrap binary, and integration tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::error!(target: "gantry::notify", "{message}");
    }

    fn success(&self, message: &str) {
        tracing::info!(target: "gantry::notify", "{message}");
    }
}
