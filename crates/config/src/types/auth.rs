//! Authentication configuration types.
//!
//! Responsibilities:
//! - Hold the optional static API token used for bearer authentication.
//!
//! Does NOT handle:
//! - Session management (the CRUD6 backend contract has no session endpoint).
//! - Token acquisition or renewal.
//!
//! Invariants:
//! - The token is wrapped in `SecretString` so it is never printed by
//!   `Debug` output or log statements.

use secrecy::SecretString;

/// Authentication settings for the CRUD6 backend.
///
/// The backend accepts an optional static bearer token. When no token is
/// configured, requests are sent unauthenticated and the backend's own
/// session handling (cookies, reverse-proxy auth) is assumed to apply.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Static API token sent as `Authorization: Bearer …`, if any.
    pub api_token: Option<SecretString>,
}

impl AuthConfig {
    /// Create an auth config carrying a static bearer token.
    pub fn with_api_token(token: SecretString) -> Self {
        Self {
            api_token: Some(token),
        }
    }
}
