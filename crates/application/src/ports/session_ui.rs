//! Session dialog port

/// Port for the login/initialization dialogs.
///
/// The auth-failure coordinator drives this after a recovery cycle; the
/// session service uses it when a password reset forces a fresh login.
/// [`crate::session::SessionEvents`] is the provided observer-backed
/// implementation; a UI may supply its own.
pub trait SessionUi: Send + Sync {
    /// Opens the login dialog.
    fn open_login(&self);

    /// Opens the first-run initialization dialog.
    fn open_init(&self);

    /// Closes the login dialog.
    fn close_login(&self);

    /// Closes the initialization dialog.
    fn close_init(&self);
}
