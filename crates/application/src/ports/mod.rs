//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the client core and external
//! systems: the HTTP transport, durable credential storage, and the UI
//! collaborators (notifications, dialogs, download presentation). Each
//! port is a trait implemented by adapters in the infrastructure layer or
//! by the embedding UI.

mod download;
mod notifier;
mod session_ui;
mod token_store;
mod transport;

pub use download::{DownloadError, DownloadSink};
pub use notifier::Notifier;
pub use session_ui::SessionUi;
pub use token_store::{StorageError, TokenStore};
pub use transport::{Transport, TransportError};
