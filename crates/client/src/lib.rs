//! CRUD6 REST API client.
//!
//! This crate provides a type-safe client for schema-driven ("CRUD6")
//! admin resource backends. A backend describes each resource type
//! ("model") with a JSON schema (fields, types, permissions, default
//! sort) which the client fetches, normalizes and caches. The
//! [`SchemaResolver`] guarantees that one rendering subtree fetches a
//! model's schema at most once, no matter how many consumers share it.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod models;
pub mod resolver;
mod serde_helpers;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::Crud6Client;
pub use client::builder::Crud6ClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    CrudOperation, FieldSpec, FieldType, FieldValidation, LengthBounds, MessageResponse,
    ModelSchema, RecordInstance, RowListResponse, SortDirection, SortSpec, ValidationError,
    blank_record_or_minimal, validate_record,
};
pub use resolver::{
    AccessCheck, AllowAll, DenyAll, ResolutionState, SchemaResolver, has_permission,
};
