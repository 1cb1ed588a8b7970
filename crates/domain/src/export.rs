//! File export types.
//!
//! Exports arrive in one of two shapes: an envelope whose payload carries
//! an inline base64 file ([`InlineExport`]), or a raw binary body named by
//! a `Content-Disposition` header. Both end up as a [`DownloadArtifact`]
//! handed to whatever download sink is registered.

use std::sync::OnceLock;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use regex::Regex;
use serde::Deserialize;

use crate::error::{DomainError, DomainResult};

/// A finished export, ready to hand to the download mechanism.
///
/// Ownership is transient: the artifact is released once delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    /// Name the file should be saved under.
    pub filename: String,
    /// File content.
    pub bytes: Vec<u8>,
}

impl DownloadArtifact {
    /// Creates an artifact from a filename and its content.
    #[must_use]
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Guesses the media type from the filename extension.
    #[must_use]
    pub fn media_type(&self) -> mime::Mime {
        mime_guess::from_path(&self.filename).first_or_octet_stream()
    }

    /// Assembles a `data:` URL for sinks that present the file in-page
    /// instead of writing it out.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.media_type(),
            BASE64.encode(&self.bytes)
        )
    }
}

/// The envelope-carried export payload: `{ filename, content }` with the
/// file content encoded as base64.
#[derive(Debug, Clone, Deserialize)]
pub struct InlineExport {
    /// Server-provided filename; may be empty.
    #[serde(default)]
    pub filename: String,
    /// Base64-encoded file content.
    pub content: String,
}

impl InlineExport {
    /// Decodes the inline payload into an artifact, falling back to
    /// `default_filename` when the server sent none.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidExportPayload`] if the content is not
    /// valid base64.
    pub fn into_artifact(self, default_filename: &str) -> DomainResult<DownloadArtifact> {
        let bytes = BASE64
            .decode(self.content.as_bytes())
            .map_err(|e| DomainError::InvalidExportPayload(e.to_string()))?;
        let filename = if self.filename.is_empty() {
            default_filename.to_string()
        } else {
            self.filename
        };
        Ok(DownloadArtifact { filename, bytes })
    }
}

#[allow(clippy::expect_used)]
fn content_disposition_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"filename\*?="?([^";]+)"?"#).expect("filename pattern is valid"))
}

/// Extracts the filename from a `Content-Disposition` header value.
#[must_use]
pub fn filename_from_content_disposition(value: &str) -> Option<String> {
    content_disposition_re()
        .captures(value)
        .map(|captures| captures[1].trim().to_string())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_inline_export_decodes_base64() {
        let inline = InlineExport {
            filename: "notes.json".to_string(),
            content: BASE64.encode(b"{\"notes\": []}"),
        };
        let artifact = inline.into_artifact("export.json").unwrap();
        assert_eq!(artifact.filename, "notes.json");
        assert_eq!(artifact.bytes, b"{\"notes\": []}");
    }

    #[test]
    fn test_inline_export_empty_filename_falls_back() {
        let inline = InlineExport {
            filename: String::new(),
            content: BASE64.encode(b"x"),
        };
        let artifact = inline.into_artifact("export.json").unwrap();
        assert_eq!(artifact.filename, "export.json");
    }

    #[test]
    fn test_inline_export_rejects_bad_base64() {
        let inline = InlineExport {
            filename: "x.bin".to_string(),
            content: "not base64 ***".to_string(),
        };
        assert!(inline.into_artifact("x").is_err());
    }

    #[test]
    fn test_content_disposition_quoted() {
        assert_eq!(
            filename_from_content_disposition(r#"attachment; filename="backup.tar.gz""#),
            Some("backup.tar.gz".to_string())
        );
    }

    #[test]
    fn test_content_disposition_bare() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename=notes.json"),
            Some("notes.json".to_string())
        );
    }

    #[test]
    fn test_content_disposition_absent() {
        assert_eq!(filename_from_content_disposition("inline"), None);
    }

    #[test]
    fn test_data_url_shape() {
        let artifact = DownloadArtifact::new("notes.json", b"{}".to_vec());
        let url = artifact.data_url();
        assert!(url.starts_with("data:application/json;base64,"));
    }
}
