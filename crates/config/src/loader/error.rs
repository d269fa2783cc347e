//! Error types for configuration loading.

use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// The base URL could not be parsed or uses an unsupported scheme.
    #[error("invalid base URL `{url}`: {message}")]
    InvalidUrl { url: String, message: String },

    /// A numeric setting fell outside its allowed range.
    #[error("{var} out of range: {message}")]
    OutOfRange { var: String, message: String },
}
