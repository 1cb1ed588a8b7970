//! User notification port

/// Port for the UI notification sink.
///
/// Every error is surfaced to the user exactly once, at the point of
/// detection; callers additionally receive a typed rejection so feature
/// code can react locally without duplicating the notification.
pub trait Notifier: Send + Sync {
    /// Shows an error notification.
    fn error(&self, message: &str);

    /// Shows a success notification.
    fn success(&self, message: &str);
}
