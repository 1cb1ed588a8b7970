//! File export pipeline.
//!
//! Retrieves a binary payload and turns it into a user-facing download.
//! Backends signal failure on "binary" endpoints in two ways: an HTTP
//! error status (handled by the client's classification, including the
//! blob-typed JSON sniff), or an HTTP 200 whose body is an envelope
//! rather than file content. The pipeline sniffs for the latter so an
//! error never ends up saved to disk as a corrupted file.

use std::sync::Arc;

use gantry_domain::{
    DownloadArtifact, InlineExport, RequestDescriptor, ResponseEnvelope,
    filename_from_content_disposition,
};

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::ports::{DownloadSink, Notifier};

/// Use case for exporting backend data as a downloadable file.
pub struct ExportPipeline {
    client: Arc<ApiClient>,
    notifier: Arc<dyn Notifier>,
    sink: Arc<dyn DownloadSink>,
}

impl ExportPipeline {
    /// Creates a pipeline delivering artifacts to the given sink.
    #[must_use]
    pub fn new(
        client: Arc<ApiClient>,
        notifier: Arc<dyn Notifier>,
        sink: Arc<dyn DownloadSink>,
    ) -> Self {
        Self {
            client,
            notifier,
            sink,
        }
    }

    /// Exports `path` as a file, naming it from the server-provided
    /// filename when present and `default_filename` otherwise.
    ///
    /// # Errors
    ///
    /// Any variant of [`ApiError`]. Errors already surfaced by the client
    /// layer are not notified a second time; export-specific failures are
    /// notified here, once.
    pub async fn export_file(
        &self,
        path: &str,
        query: &[(&str, &str)],
        default_filename: &str,
    ) -> ApiResult<()> {
        let descriptor = RequestDescriptor::get(path)
            .with_query(query.iter().copied())
            .binary();
        let reply = self.client.raw(descriptor).await?;

        let artifact = if let Ok(envelope) = ResponseEnvelope::parse(&reply.body) {
            // An envelope on a binary endpoint: either an inline base64
            // export or a business failure dressed as a 200.
            let data = match envelope.into_data() {
                Ok(data) => data,
                Err(rejection) => {
                    let message = rejection.message_or("Export failed");
                    self.notifier.error(&message);
                    return Err(ApiError::Business {
                        code: rejection.code,
                        message,
                    });
                }
            };
            let inline: InlineExport = serde_json::from_value(data)
                .map_err(|e| self.fail(&format!("unexpected export payload: {e}")))?;
            inline
                .into_artifact(default_filename)
                .map_err(|e| self.fail(&e.to_string()))?
        } else {
            let filename = reply
                .header("content-disposition")
                .and_then(filename_from_content_disposition)
                .unwrap_or_else(|| default_filename.to_string());
            DownloadArtifact::new(filename, reply.body)
        };

        tracing::info!(filename = %artifact.filename, size = artifact.bytes.len(), "export ready");
        self.sink
            .deliver(&artifact)
            .await
            .map_err(|e| self.fail(&e.to_string()))?;
        self.notifier.success("Export complete");
        Ok(())
    }

    fn fail(&self, detail: &str) -> ApiError {
        self.notifier.error(&format!("Export failed: {detail}"));
        ApiError::Export(detail.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::test_support::{ClientFixture, RecordingDownloadSink, fixture};

    fn pipeline(fx: &ClientFixture) -> (ExportPipeline, Arc<RecordingDownloadSink>) {
        let sink = Arc::new(RecordingDownloadSink::default());
        let pipeline = ExportPipeline::new(fx.client.clone(), fx.notifier.clone(), sink.clone());
        (pipeline, sink)
    }

    #[tokio::test]
    async fn test_inline_envelope_export() {
        let fx = fixture();
        let (pipeline, sink) = pipeline(&fx);
        let body = serde_json::to_vec(&json!({
            "code": 200,
            "message": "ok",
            "data": {"filename": "notes.json", "content": BASE64.encode(b"{\"notes\":[]}")}
        }))
        .unwrap();
        fx.transport.push_reply(200, &body);

        pipeline
            .export_file("/note/export", &[], "export.json")
            .await
            .unwrap();

        let delivered = sink.delivered();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].filename, "notes.json");
        assert_eq!(delivered[0].bytes, b"{\"notes\":[]}");
        assert_eq!(fx.notifier.successes(), vec!["Export complete".to_string()]);
    }

    #[tokio::test]
    async fn test_raw_binary_named_from_content_disposition() {
        let fx = fixture();
        let (pipeline, sink) = pipeline(&fx);
        fx.transport.push_reply_with_headers(
            200,
            &[0x50, 0x4b, 0x03, 0x04],
            &[("content-disposition", "attachment; filename=\"backup.zip\"")],
        );

        pipeline
            .export_file("/sys/backup", &[], "fallback.zip")
            .await
            .unwrap();

        assert_eq!(sink.delivered()[0].filename, "backup.zip");
    }

    #[tokio::test]
    async fn test_raw_binary_falls_back_to_default_filename() {
        let fx = fixture();
        let (pipeline, sink) = pipeline(&fx);
        fx.transport.push_reply(200, &[0x50, 0x4b, 0x03, 0x04]);

        pipeline
            .export_file("/sys/backup", &[], "fallback.zip")
            .await
            .unwrap();

        assert_eq!(sink.delivered()[0].filename, "fallback.zip");
    }

    #[tokio::test]
    async fn test_envelope_error_is_not_a_corrupted_download() {
        let fx = fixture();
        let (pipeline, sink) = pipeline(&fx);
        let body =
            serde_json::to_vec(&json!({"code": 500, "message": "nothing to export"})).unwrap();
        fx.transport.push_reply(200, &body);

        let err = pipeline
            .export_file("/note/export", &[], "export.json")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Business { .. }));
        assert!(sink.delivered().is_empty());
        assert_eq!(fx.notifier.errors(), vec!["nothing to export".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auth_failure_on_blob_endpoint_routes_to_recovery() {
        let fx = fixture();
        let (pipeline, sink) = pipeline(&fx);
        fx.transport
            .push_reply(401, br#"{"code": 401, "message": "token expired"}"#);

        let err = pipeline
            .export_file("/note/export", &[], "export.json")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
        assert!(sink.delivered().is_empty());

        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        assert_eq!(fx.session.login_opens(), 1);
    }

    #[tokio::test]
    async fn test_bad_inline_payload_notifies_export_failure() {
        let fx = fixture();
        let (pipeline, sink) = pipeline(&fx);
        let body = serde_json::to_vec(&json!({
            "code": 200,
            "message": "ok",
            "data": {"filename": "x.bin", "content": "*** not base64 ***"}
        }))
        .unwrap();
        fx.transport.push_reply(200, &body);

        let err = pipeline
            .export_file("/note/export", &[], "export.json")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Export(_)));
        assert!(sink.delivered().is_empty());
        assert!(fx.notifier.errors()[0].starts_with("Export failed: "));
    }

    #[tokio::test]
    async fn test_sink_failure_notifies_once() {
        let fx = fixture();
        let sink = Arc::new(RecordingDownloadSink::failing());
        let pipeline = ExportPipeline::new(fx.client.clone(), fx.notifier.clone(), sink);
        fx.transport.push_reply(200, &[1, 2, 3]);

        let err = pipeline
            .export_file("/sys/backup", &[], "backup.bin")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Export(_)));
        assert_eq!(fx.notifier.errors().len(), 1);
        assert!(fx.notifier.successes().is_empty());
    }

    #[tokio::test]
    async fn test_query_parameters_reach_the_transport() {
        let fx = fixture();
        let (pipeline, _sink) = pipeline(&fx);
        fx.transport.push_reply(200, &[1]);

        pipeline
            .export_file("/note/export", &[("folder", "inbox")], "export.json")
            .await
            .unwrap();

        let sent = fx.transport.last_request();
        assert!(sent.is_binary());
        assert_eq!(sent.query, vec![("folder".to_string(), "inbox".to_string())]);
    }
}
