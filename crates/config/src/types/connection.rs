//! Connection configuration types for the CRUD6 client.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout, retries).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Duration fields are serialized as seconds (integers).
//! - Default values come from the `constants` module, not magic numbers.
//! - `Config::default()` provides sensible development defaults.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the CRUD6 backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the backend (e.g., `https://admin.example.com`).
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates).
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds).
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited requests.
    pub max_retries: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Connection settings.
    pub connection: ConnectionConfig,
    /// Authentication settings.
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config pointing at the given base URL with no authentication.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig::default(),
        }
    }

    /// Create a config pointing at the given base URL with a static API token.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig::with_api_token(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_connection_config() {
        let config = ConnectionConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.skip_verify);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_duration_serialized_as_seconds() {
        let config = ConnectionConfig {
            timeout: Duration::from_secs(120),
            ..ConnectionConfig::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["timeout"], 120);

        let parsed: ConnectionConfig = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_with_api_token() {
        let config = Config::with_api_token(
            "https://admin.example.com".to_string(),
            SecretString::new("test-token".to_string().into()),
        );
        assert_eq!(config.connection.base_url, "https://admin.example.com");
        assert!(config.auth.api_token.is_some());
    }
}
