//! Main CRUD6 API client and API methods.
//!
//! This module provides the primary [`Crud6Client`] for talking to a CRUD6
//! backend. Methods are organized by resource concern:
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `schema`: Schema fetch methods
//! - `rows`: Row data methods (list/get/create/update/delete)
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Schema caching and deduplication (see [`crate::resolver`])

pub mod builder;
mod rows;
mod schema;

use secrecy::{ExposeSecret, SecretString};

/// CRUD6 REST API client.
///
/// # Creating a Client
///
/// Use [`Crud6Client::builder()`]:
///
/// ```rust,ignore
/// use crud6_client::Crud6Client;
///
/// let client = Crud6Client::builder()
///     .base_url("https://admin.example.com".to_string())
///     .build()?;
/// ```
///
/// Authentication is an optional static bearer token; without one,
/// requests are sent unauthenticated.
#[derive(Debug)]
pub struct Crud6Client {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_token: Option<SecretString>,
    pub(crate) max_retries: usize,
}

impl Crud6Client {
    /// Create a new client builder.
    pub fn builder() -> builder::Crud6ClientBuilder {
        builder::Crud6ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a bearer token is configured.
    pub fn has_api_token(&self) -> bool {
        self.api_token.is_some()
    }

    pub(crate) fn bearer(&self) -> Option<&str> {
        self.api_token.as_ref().map(ExposeSecret::expose_secret)
    }
}
