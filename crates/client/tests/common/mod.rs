//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly
//! used types for testing the CRUD6 client. All integration tests should
//! use these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the
//!   crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::sync::Arc;

// Re-export test utilities from crud6-client
#[allow(unused_imports)]
pub use crud6_client::testing::load_fixture;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use crud6_client::{Crud6Client, SchemaResolver, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at a mock server, with retries disabled down to
/// a single extra attempt so failure tests stay fast.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> Arc<Crud6Client> {
    Arc::new(
        Crud6Client::builder()
            .base_url(server.uri())
            .max_retries(1)
            .build()
            .expect("client builds against mock server"),
    )
}
