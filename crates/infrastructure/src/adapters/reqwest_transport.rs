//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `Transport` port using the reqwest
//! library. It handles all HTTP communication for the client core:
//! URL assembly against the configured API root, query encoding, JSON
//! bodies, the fixed per-request timeout, and the cookie jar that keeps
//! cross-origin sessions alive.

use std::collections::HashMap;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, Method};
use url::Url;

use gantry_application::config::ClientConfig;
use gantry_application::ports::{Transport, TransportError};
use gantry_domain::{HttpMethod, RequestDescriptor, TransportReply};

/// HTTP transport backed by `reqwest::Client`.
pub struct ReqwestTransport {
    client: Client,
    root: Url,
    timeout: std::time::Duration,
}

impl ReqwestTransport {
    /// Creates a transport for the configured API root.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidUrl`] when the configured origin
    /// and base path do not form a valid URL, or
    /// [`TransportError::Other`] if the underlying client cannot be
    /// built.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("Gantry/", env!("CARGO_PKG_VERSION")))
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;
        Self::with_client(client, config)
    }

    /// Creates a transport with a custom reqwest client.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidUrl`] when the configured origin
    /// and base path do not form a valid URL.
    pub fn with_client(client: Client, config: &ClientConfig) -> Result<Self, TransportError> {
        let root = config.api_root();
        let root =
            Url::parse(&root).map_err(|e| TransportError::InvalidUrl(format!("{e}: {root}")))?;
        Ok(Self {
            client,
            root,
            timeout: config.timeout,
        })
    }

    /// Converts the domain method to the reqwest method.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Assembles the full request URL: API root, descriptor path, query.
    fn endpoint(&self, request: &RequestDescriptor) -> Result<Url, TransportError> {
        let mut raw = format!(
            "{}{}",
            self.root.as_str().trim_end_matches('/'),
            request.path
        );
        if !request.query.is_empty() {
            let encoded = serde_urlencoded::to_string(&request.query)
                .map_err(|e| TransportError::InvalidUrl(e.to_string()))?;
            raw.push('?');
            raw.push_str(&encoded);
        }
        Url::parse(&raw).map_err(|e| TransportError::InvalidUrl(format!("{e}: {raw}")))
    }

    /// Maps reqwest errors to the transport error taxonomy.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }
        if error.is_connect() {
            return TransportError::Connection(error.to_string());
        }
        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &RequestDescriptor) -> Result<TransportReply, TransportError> {
        let url = self.endpoint(request)?;
        let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);

        let start = Instant::now();
        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .timeout(self.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?;
        let duration = start.elapsed();

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_ascii_lowercase(),
                    value.to_str().unwrap_or("<binary>").to_string(),
                )
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("failed to read body: {e}")))?
            .to_vec();

        Ok(TransportReply::new(status, headers, body, duration))
    }
}
