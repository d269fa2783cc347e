//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `CRUD6_*` environment variables.
//! - Apply environment variable values to a [`ConfigLoader`] instance.
//!
//! Does NOT handle:
//! - `.env` file loading (handled by `ConfigLoader::load_dotenv`).
//! - Final validation (handled by `ConfigLoader::load`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;

use super::ConfigLoader;
use super::error::ConfigError;
use crate::constants::MAX_MAX_RETRIES;

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("CRUD6_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(token) = env_var_or_none("CRUD6_API_TOKEN") {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = env_var_or_none("CRUD6_SKIP_VERIFY") {
        loader.set_skip_verify(Some(skip.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: "CRUD6_SKIP_VERIFY".to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    if let Some(timeout) = env_var_or_none("CRUD6_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "CRUD6_TIMEOUT".to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = env_var_or_none("CRUD6_MAX_RETRIES") {
        let value: usize = retries.parse().map_err(|_| ConfigError::InvalidValue {
            var: "CRUD6_MAX_RETRIES".to_string(),
            message: "must be a non-negative integer".to_string(),
        })?;
        if value > MAX_MAX_RETRIES {
            return Err(ConfigError::OutOfRange {
                var: "CRUD6_MAX_RETRIES".to_string(),
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
            });
        }
        loader.set_max_retries(Some(value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_or_none_trims_whitespace() {
        temp_env::with_var("CRUD6_TEST_TRIM", Some("  value  "), || {
            assert_eq!(
                env_var_or_none("CRUD6_TEST_TRIM"),
                Some("value".to_string())
            );
        });
    }

    #[test]
    fn test_env_var_or_none_empty_is_unset() {
        temp_env::with_var("CRUD6_TEST_EMPTY", Some("   "), || {
            assert_eq!(env_var_or_none("CRUD6_TEST_EMPTY"), None);
        });
    }
}
