//! REST API endpoint implementations.
//!
//! Free functions that take a `reqwest::Client`, the backend base URL and
//! an optional bearer token. The high-level [`crate::Crud6Client`] methods
//! delegate here; tests can exercise endpoints directly against a mock
//! server.

mod request;
pub mod rows;
pub mod schema;

pub use request::send_request_with_retry;
pub use rows::{ListParams, create_row, delete_row, get_row, list_rows, update_row};
pub use schema::{get_schema, normalize_schema_payload};
