//! Configuration management for the CRUD6 client.
//!
//! This crate provides types and loaders for managing CRUD6 backend
//! connection configuration from environment variables and `.env` files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{AuthConfig, Config, ConnectionConfig};
