//! The API client.
//!
//! Single access point for every feature module: builds descriptors,
//! attaches the bearer credential (except on the public allow-list),
//! hands them to the transport and classifies what comes back. Structured
//! replies are unwrapped from the response envelope so callers only ever
//! see the payload; 401/403 replies are routed through the auth-failure
//! coordinator; binary replies pass through untouched for the export
//! pipeline.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use gantry_domain::{
    AuthChallenge, RequestDescriptor, ResponseEnvelope, ResponseKind, TransportReply,
};

use crate::error::{ApiError, ApiResult};
use crate::ports::{Notifier, TokenStore, Transport};
use crate::recovery::AuthFailureCoordinator;

/// Notification shown when the transport produced no reply at all.
const CONNECTIVITY_MESSAGE: &str = "Network error, check your connection";

/// Fallback notification for failures without a usable message.
const GENERIC_FAILURE: &str = "Request failed";

/// The backend API client.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
    notifier: Arc<dyn Notifier>,
    recovery: Arc<AuthFailureCoordinator>,
}

impl ApiClient {
    /// Paths served without authentication. The backend remains the
    /// source of truth on whether anonymous access is permitted; the
    /// client merely never attaches a credential here.
    pub const PUBLIC_PATHS: [&'static str; 4] = [
        "/sys/init/check",
        "/sys/init/setup",
        "/sys/login",
        "/sys/health",
    ];

    /// Creates a client over the given ports.
    #[must_use]
    pub fn new(
        transport: Arc<dyn Transport>,
        tokens: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
        recovery: Arc<AuthFailureCoordinator>,
    ) -> Self {
        Self {
            transport,
            tokens,
            notifier,
            recovery,
        }
    }

    /// Returns true if the path is on the unauthenticated allow-list.
    #[must_use]
    pub fn is_public_path(path: &str) -> bool {
        Self::PUBLIC_PATHS
            .iter()
            .any(|public| path.starts_with(public))
    }

    /// Dispatches a structured request and unwraps the envelope.
    ///
    /// # Errors
    ///
    /// Any variant of [`ApiError`]; the user has already been notified
    /// once by the time this returns.
    pub async fn dispatch(&self, descriptor: RequestDescriptor) -> ApiResult<Value> {
        let reply = self.send(descriptor).await?;
        let envelope = match ResponseEnvelope::parse(&reply.body) {
            Ok(envelope) => envelope,
            Err(err) => {
                self.notifier.error(GENERIC_FAILURE);
                return Err(ApiError::Decode(err.to_string()));
            }
        };
        match envelope.into_data() {
            Ok(data) => Ok(data),
            Err(rejection) => {
                let message = rejection.message_or(GENERIC_FAILURE);
                self.notifier.error(&message);
                Err(ApiError::Business {
                    code: rejection.code,
                    message,
                })
            }
        }
    }

    /// Dispatches a request and returns the raw reply, bypassing envelope
    /// decoding. Used by the export pipeline for binary payloads; error
    /// statuses are still classified (including envelope sniffing on
    /// blob-typed error bodies).
    ///
    /// # Errors
    ///
    /// Any variant of [`ApiError`]; the user has already been notified
    /// once by the time this returns.
    pub async fn raw(&self, descriptor: RequestDescriptor) -> ApiResult<TransportReply> {
        self.send(descriptor).await
    }

    /// GET a structured endpoint.
    ///
    /// # Errors
    ///
    /// See [`Self::dispatch`].
    pub async fn get(&self, path: &str) -> ApiResult<Value> {
        self.dispatch(RequestDescriptor::get(path)).await
    }

    /// GET a structured endpoint with query parameters.
    ///
    /// # Errors
    ///
    /// See [`Self::dispatch`].
    pub async fn get_with(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<Value> {
        self.dispatch(RequestDescriptor::get(path).with_query(query.iter().copied()))
            .await
    }

    /// POST a JSON body to a structured endpoint.
    ///
    /// # Errors
    ///
    /// See [`Self::dispatch`].
    pub async fn post(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.dispatch(RequestDescriptor::post(path, body)).await
    }

    /// PUT a JSON body to a structured endpoint.
    ///
    /// # Errors
    ///
    /// See [`Self::dispatch`].
    pub async fn put(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.dispatch(RequestDescriptor::put(path, body)).await
    }

    /// DELETE a structured endpoint.
    ///
    /// # Errors
    ///
    /// See [`Self::dispatch`].
    pub async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.dispatch(RequestDescriptor::delete(path)).await
    }

    /// Dispatches a structured request and deserializes the payload.
    ///
    /// # Errors
    ///
    /// See [`Self::dispatch`]; additionally [`ApiError::Decode`] when the
    /// payload does not match `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, descriptor: RequestDescriptor) -> ApiResult<T> {
        let data = self.dispatch(descriptor).await?;
        serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send(&self, mut descriptor: RequestDescriptor) -> ApiResult<TransportReply> {
        self.attach_credential(&mut descriptor).await;
        tracing::debug!(
            id = %descriptor.id,
            method = %descriptor.method,
            path = %descriptor.path,
            "dispatching request"
        );
        match self.transport.execute(&descriptor).await {
            Ok(reply) => self.classify(reply, descriptor.response_kind).await,
            Err(err) => {
                self.notifier.error(CONNECTIVITY_MESSAGE);
                Err(ApiError::Transport(err))
            }
        }
    }

    async fn attach_credential(&self, descriptor: &mut RequestDescriptor) {
        if Self::is_public_path(&descriptor.path) {
            return;
        }
        match self.tokens.get().await {
            Ok(Some(credential)) => {
                descriptor
                    .headers
                    .push(("Authorization".to_string(), credential.bearer_header()));
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(%err, "token store read failed, dispatching unauthenticated");
            }
        }
    }

    async fn classify(
        &self,
        reply: TransportReply,
        kind: ResponseKind,
    ) -> ApiResult<TransportReply> {
        if let Some(challenge) = AuthChallenge::from_reply(&reply) {
            return Err(self.recovery.handle(challenge).await);
        }
        if reply.is_success() {
            return Ok(reply);
        }
        Err(match ResponseEnvelope::parse(&reply.body) {
            Ok(envelope) => {
                let message = envelope
                    .display_message()
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string());
                let code = envelope.code;
                self.notifier.error(&message);
                ApiError::Business { code, message }
            }
            Err(_) if kind == ResponseKind::Binary => {
                self.notifier.error("File download failed");
                ApiError::Export("file download failed".to_string())
            }
            Err(_) => {
                self.notifier.error(GENERIC_FAILURE);
                ApiError::Business {
                    code: i64::from(reply.status),
                    message: GENERIC_FAILURE.to_string(),
                }
            }
        })
    }
}
