//! Gantry Application - Use cases and ports
//!
//! This crate defines the client core's application layer:
//! - Port traits (interfaces for the transport, storage and UI collaborators)
//! - The API client, auth-failure coordinator and export pipeline
//! - Session use cases and application-level error handling

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod ports;
pub mod recovery;
pub mod session;

#[cfg(test)]
mod test_support;

pub use auth::MemoryTokenStore;
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use export::ExportPipeline;
pub use ports::{
    DownloadError, DownloadSink, Notifier, SessionUi, StorageError, TokenStore, Transport,
    TransportError,
};
pub use recovery::AuthFailureCoordinator;
pub use session::{DialogState, SessionEvents, SessionService};
