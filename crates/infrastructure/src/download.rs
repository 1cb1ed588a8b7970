//! Filesystem download sink.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use gantry_application::ports::{DownloadError, DownloadSink};
use gantry_domain::DownloadArtifact;

/// Download sink that writes artifacts into a downloads directory.
///
/// This is the direct-download branch; an embedding UI replaces it with
/// its own [`DownloadSink`] to present a dialog instead.
#[derive(Debug, Clone)]
pub struct FsDownloadSink {
    dir: PathBuf,
}

impl FsDownloadSink {
    /// Creates a sink writing into the given directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Server-provided filenames are reduced to their terminal component
    /// so an artifact can never escape the downloads directory.
    fn safe_name(filename: &str) -> &str {
        Path::new(filename)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("download")
    }
}

#[async_trait]
impl DownloadSink for FsDownloadSink {
    async fn deliver(&self, artifact: &DownloadArtifact) -> Result<(), DownloadError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let target = self.dir.join(Self::safe_name(&artifact.filename));
        tokio::fs::write(&target, &artifact.bytes).await?;
        tracing::info!(
            path = %target.display(),
            media_type = %artifact.media_type(),
            size = artifact.bytes.len(),
            "export written"
        );
        Ok(())
    }
}
