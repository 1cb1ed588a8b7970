//! Gantry Domain - Core business types
//!
//! This crate defines the domain model for the Gantry admin console
//! client. All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod credential;
pub mod envelope;
pub mod error;
pub mod export;
pub mod reply;
pub mod request;
pub mod settings;

pub use auth::{AuthChallenge, ChallengeKind, ForbiddenPolicy};
pub use credential::Credential;
pub use envelope::{EnvelopeRejection, ResponseEnvelope, SUCCESS_CODE};
pub use error::{DomainError, DomainResult};
pub use export::{DownloadArtifact, InlineExport, filename_from_content_disposition};
pub use reply::TransportReply;
pub use request::{HttpMethod, RequestDescriptor, ResponseKind};
pub use settings::ThemeMode;
