//! Raw transport reply type.

use std::collections::HashMap;
use std::time::Duration;

/// A raw HTTP reply as produced by the transport, before any envelope
/// decoding or error classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, keys lowercased by the transport.
    pub headers: HashMap<String, String>,
    /// Raw body bytes.
    pub body: Vec<u8>,
    /// Time spent waiting on the transport.
    pub duration: Duration,
}

impl TransportReply {
    /// Creates a reply from its parts.
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, String>,
        body: Vec<u8>,
        duration: Duration,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            duration,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Looks up a header value, ignoring case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        let lowered = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(&lowered))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the body interpreted as UTF-8, lossily.
    #[must_use]
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_with_header(name: &str, value: &str) -> TransportReply {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), value.to_string());
        TransportReply::new(200, headers, Vec::new(), Duration::from_millis(5))
    }

    #[test]
    fn test_status_classes() {
        let ok = reply_with_header("content-type", "application/json");
        assert!(ok.is_success());

        let unauthorized = TransportReply::new(401, HashMap::new(), Vec::new(), Duration::ZERO);
        assert!(!unauthorized.is_success());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let reply = reply_with_header("content-disposition", "attachment");
        assert_eq!(reply.header("Content-Disposition"), Some("attachment"));
        assert_eq!(reply.header("CONTENT-DISPOSITION"), Some("attachment"));
        assert_eq!(reply.header("x-missing"), None);
    }
}
