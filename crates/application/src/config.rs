//! Client configuration.

use std::time::Duration;

use gantry_domain::ForbiddenPolicy;

/// Default backend origin when `API_ORIGIN` is unset.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";

/// Default API base path when `API_BASE_URL` is unset.
pub const DEFAULT_BASE_PATH: &str = "/api";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default delay between an auth failure and the recovery dialog, chosen
/// to let in-flight UI transitions settle.
pub const DEFAULT_RECOVERY_DELAY_MS: u64 = 450;

/// Configuration for the client core.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin, e.g. `https://console.example.com`.
    pub origin: String,
    /// API base path appended to the origin.
    pub base_path: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Delay before the recovery dialog opens after an auth failure.
    pub recovery_delay: Duration,
    /// What a 403 reply triggers.
    pub forbidden_policy: ForbiddenPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            recovery_delay: Duration::from_millis(DEFAULT_RECOVERY_DELAY_MS),
            forbidden_policy: ForbiddenPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Builds a configuration from the environment.
    ///
    /// Reads `API_ORIGIN`, `API_BASE_URL`, `API_TIMEOUT_MS` and
    /// `API_FORBIDDEN_POLICY` (`reinitialize` | `surface`), falling back
    /// to the defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let origin = std::env::var("API_ORIGIN").unwrap_or(defaults.origin);
        let base_path = std::env::var("API_BASE_URL").unwrap_or(defaults.base_path);
        let timeout = std::env::var("API_TIMEOUT_MS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .map_or(defaults.timeout, Duration::from_millis);
        let forbidden_policy = match std::env::var("API_FORBIDDEN_POLICY").as_deref() {
            Ok("surface") => ForbiddenPolicy::Surface,
            Ok("reinitialize") => ForbiddenPolicy::Reinitialize,
            _ => defaults.forbidden_policy,
        };
        Self {
            origin,
            base_path,
            timeout,
            recovery_delay: defaults.recovery_delay,
            forbidden_policy,
        }
    }

    /// Returns the joined API root, e.g. `http://127.0.0.1:8000/api`.
    #[must_use]
    pub fn api_root(&self) -> String {
        format!("{}{}", self.origin.trim_end_matches('/'), self.base_path)
    }
}
