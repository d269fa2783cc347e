//! Configuration loading from environment variables and `.env` files.
//!
//! Responsibilities:
//! - Accumulate settings from `.env` and process environment variables.
//! - Validate accumulated settings (URL shape, bounded numeric ranges).
//! - Produce a final [`Config`] with defaults filled in.
//!
//! Does NOT handle:
//! - Persisted profiles or credential stores; configuration is env-only.
//!
//! Invariants:
//! - Environment variables take precedence over programmatic defaults.
//! - `load()` never panics; all failures surface as [`ConfigError`].

mod env;
mod error;

pub use error::ConfigError;

use secrecy::SecretString;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::constants::MAX_TIMEOUT_SECS;
use crate::types::{AuthConfig, Config, ConnectionConfig};

/// Builder-style loader that accumulates configuration from the environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
    skip_dotenv: bool,
}

impl ConfigLoader {
    /// Create a new loader with no settings applied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip loading a `.env` file (used by tests to isolate the process env).
    pub fn without_dotenv(mut self) -> Self {
        self.skip_dotenv = true;
        self
    }

    pub fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub fn set_api_token(&mut self, token: Option<SecretString>) {
        self.api_token = token;
    }

    pub fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    /// Load configuration: `.env` file first, then process environment,
    /// then validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any variable fails to parse or validate.
    pub fn load(mut self) -> Result<Config, ConfigError> {
        if !self.skip_dotenv {
            // Missing .env files are fine; only an explicit file matters.
            if let Ok(path) = dotenvy::dotenv() {
                debug!(path = %path.display(), "loaded .env file");
            }
        }

        env::apply_env(&mut self)?;
        self.validate()?;

        let defaults = ConnectionConfig::default();
        Ok(Config {
            connection: ConnectionConfig {
                base_url: normalize_base_url(
                    self.base_url.unwrap_or_else(|| defaults.base_url.clone()),
                ),
                skip_verify: self.skip_verify.unwrap_or(defaults.skip_verify),
                timeout: self.timeout.unwrap_or(defaults.timeout),
                max_retries: self.max_retries.unwrap_or(defaults.max_retries),
            },
            auth: AuthConfig {
                api_token: self.api_token,
            },
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.base_url {
            let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidUrl {
                url: url.clone(),
                message: e.to_string(),
            })?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(ConfigError::InvalidUrl {
                    url: url.clone(),
                    message: format!("unsupported scheme `{}`", parsed.scheme()),
                });
            }
        }
        if let Some(timeout) = self.timeout {
            if timeout.is_zero() || timeout.as_secs() > MAX_TIMEOUT_SECS {
                return Err(ConfigError::OutOfRange {
                    var: "CRUD6_TIMEOUT".to_string(),
                    message: format!(
                        "must be between 1 and {} seconds (got {})",
                        MAX_TIMEOUT_SECS,
                        timeout.as_secs()
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Normalize a base URL by removing trailing slashes.
///
/// This prevents double slashes when concatenating with endpoint paths.
fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://admin.example.com/".to_string()),
            "https://admin.example.com"
        );
        assert_eq!(
            normalize_base_url("https://admin.example.com//".to_string()),
            "https://admin.example.com"
        );
        assert_eq!(
            normalize_base_url("https://admin.example.com".to_string()),
            "https://admin.example.com"
        );
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut loader = ConfigLoader::new().without_dotenv();
        loader.set_timeout(Some(Duration::from_secs(0)));
        assert!(matches!(
            loader.validate(),
            Err(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let mut loader = ConfigLoader::new().without_dotenv();
        loader.set_base_url(Some("ftp://admin.example.com".to_string()));
        assert!(matches!(
            loader.validate(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }
}
