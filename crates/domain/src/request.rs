//! Request descriptor types.
//!
//! A [`RequestDescriptor`] captures everything the dispatcher needs to
//! issue one call against the backend API: path, method, query, body and
//! the expected response handling. Descriptors are constructed fresh per
//! call and are immutable once dispatched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// HTTP methods the console issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET.
    #[default]
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP PATCH.
    Patch,
    /// HTTP DELETE.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as an uppercase string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the response body should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// The body is a JSON envelope and is decoded before the caller sees it.
    #[default]
    Structured,
    /// The body is an opaque byte stream handed to the export pipeline.
    Binary,
}

/// Complete specification for one outbound API call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// Unique identifier, used to correlate log events.
    pub id: Uuid,
    /// Target path relative to the API base, e.g. `/sys/login`.
    pub path: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Query parameters, appended to the URL in order.
    pub query: Vec<(String, String)>,
    /// Optional JSON body.
    pub body: Option<Value>,
    /// Extra headers attached by the dispatcher.
    pub headers: Vec<(String, String)>,
    /// Expected response handling.
    pub response_kind: ResponseKind,
}

impl RequestDescriptor {
    /// Creates a descriptor for the given method and path.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            path: path.into(),
            method,
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
            response_kind: ResponseKind::Structured,
        }
    }

    /// Creates a GET descriptor.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST descriptor with a JSON body.
    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        let mut descriptor = Self::new(HttpMethod::Post, path);
        descriptor.body = Some(body);
        descriptor
    }

    /// Creates a PUT descriptor with a JSON body.
    #[must_use]
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        let mut descriptor = Self::new(HttpMethod::Put, path);
        descriptor.body = Some(body);
        descriptor
    }

    /// Creates a DELETE descriptor.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Adds query parameters.
    #[must_use]
    pub fn with_query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Adds a header to the outgoing request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Marks the response as an opaque byte stream.
    #[must_use]
    pub fn binary(mut self) -> Self {
        self.response_kind = ResponseKind::Binary;
        self
    }

    /// Returns true if the response should bypass envelope decoding.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self.response_kind, ResponseKind::Binary)
    }
}
