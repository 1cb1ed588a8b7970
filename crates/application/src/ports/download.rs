//! Download presentation port

use async_trait::async_trait;
use gantry_domain::DownloadArtifact;
use thiserror::Error;

/// Errors that can occur delivering a finished export.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other delivery failure.
    #[error("download failed: {0}")]
    Other(String),
}

/// Port for presenting a finished export to the user.
///
/// The default adapter writes the artifact straight to disk; an embedding
/// UI can register its own sink to show a download dialog instead (the
/// artifact's [`DownloadArtifact::data_url`] suits in-page presentation).
#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Hands the artifact to the user.
    ///
    /// # Errors
    ///
    /// Returns a [`DownloadError`] if the artifact could not be delivered.
    async fn deliver(&self, artifact: &DownloadArtifact) -> Result<(), DownloadError>;
}
