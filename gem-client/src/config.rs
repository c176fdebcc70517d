//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | GEM_API_URL | https://localhost:7001/ | Backend base URL |
//! | GEM_API_TIMEOUT_MS | 100000 | Per-request timeout |
//! | GEM_MAX_LOADING_MS | 10000 | Loading indicator auto-hide |

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://localhost:7001/";
pub const DEFAULT_TIMEOUT_MS: u64 = 100_000;
pub const DEFAULT_MAX_LOADING_MS: u64 = 10_000;

/// Storage key names for persisted auth state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Bearer token, always durable
    pub token: String,
    /// Serialized user record
    pub user: String,
    /// `"true"` when the user record lives in durable storage
    pub remember_me: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            token: "token-gem".into(),
            user: "user".into(),
            remember_me: "rememberMe".into(),
        }
    }
}

/// Client configuration for connecting to the jewelry backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://localhost:7001/")
    pub base_url: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// The loading indicator is forced off after this long
    pub max_loading_ms: u64,

    pub storage_keys: StorageKeys,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_loading_ms: DEFAULT_MAX_LOADING_MS,
            storage_keys: StorageKeys::default(),
        }
    }

    /// Load from environment variables, falling back to defaults for
    /// anything unset or unparsable
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("GEM_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            timeout_ms: std::env::var("GEM_API_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS),
            max_loading_ms: std::env::var("GEM_MAX_LOADING_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_LOADING_MS),
            storage_keys: StorageKeys::default(),
        }
    }

    pub fn with_timeout_ms(mut self, ms: u64) -> Self {
        self.timeout_ms = ms;
        self
    }

    pub fn with_max_loading_ms(mut self, ms: u64) -> Self {
        self.max_loading_ms = ms;
        self
    }

    pub fn with_storage_keys(mut self, keys: StorageKeys) -> Self {
        self.storage_keys = keys;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn max_loading(&self) -> Duration {
        Duration::from_millis(self.max_loading_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://localhost:7001/");
        assert_eq!(config.timeout(), Duration::from_secs(100));
        assert_eq!(config.max_loading(), Duration::from_secs(10));
        assert_eq!(config.storage_keys.token, "token-gem");
        assert_eq!(config.storage_keys.user, "user");
        assert_eq!(config.storage_keys.remember_me, "rememberMe");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("http://127.0.0.1:9000")
            .with_timeout_ms(500)
            .with_max_loading_ms(50);
        assert_eq!(config.timeout_ms, 500);
        assert_eq!(config.max_loading_ms, 50);
    }
}
