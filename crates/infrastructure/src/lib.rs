//! Gantry Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: the reqwest transport, file-backed persistence
//! for the credential and theme preference, the filesystem download sink
//! and the tracing notification sink.

pub mod adapters;
pub mod download;
pub mod notify;
pub mod persistence;

pub use adapters::ReqwestTransport;
pub use download::FsDownloadSink;
pub use notify::TracingNotifier;
pub use persistence::{FileKeyValueStore, FileTokenStore, ThemeRepository, THEME_KEY, TOKEN_KEY};
