//! Observer-backed session dialog state.
//!
//! The dialog open/close callbacks are modeled as a plain observer over
//! an explicit state value: interested parties subscribe to a watch
//! channel and react to [`DialogState`] changes, independent of any UI
//! reactivity system.

use tokio::sync::watch;

use crate::ports::SessionUi;

/// Which session dialogs are currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogState {
    /// The login dialog is open.
    pub login_open: bool,
    /// The first-run initialization dialog is open.
    pub init_open: bool,
}

/// Pub-sub implementation of [`SessionUi`].
#[derive(Debug)]
pub struct SessionEvents {
    state: watch::Sender<DialogState>,
}

impl SessionEvents {
    /// Creates the event hub with both dialogs closed.
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(DialogState::default());
        Self { state }
    }

    /// Subscribes to dialog state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DialogState> {
        self.state.subscribe()
    }

    /// Returns the current dialog state.
    #[must_use]
    pub fn state(&self) -> DialogState {
        *self.state.borrow()
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionUi for SessionEvents {
    fn open_login(&self) {
        self.state.send_modify(|state| state.login_open = true);
    }

    fn open_init(&self) {
        self.state.send_modify(|state| state.init_open = true);
    }

    fn close_login(&self) {
        self.state.send_modify(|state| state.login_open = false);
    }

    fn close_init(&self) {
        self.state.send_modify(|state| state.init_open = false);
    }
}
