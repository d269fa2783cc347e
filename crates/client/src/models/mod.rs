//! Data models for CRUD6 API responses.
//!
//! This module provides types for deserializing backend schema and row
//! responses. Types are organized by concern in submodules and re-exported
//! here for convenient access.

pub mod record;
pub mod response;
pub mod schema;
pub mod validation;

pub use record::{RecordInstance, blank_record_or_minimal, minimal_record};
pub use response::{MessageResponse, RowListResponse};
pub use schema::{
    CrudOperation, FieldSpec, FieldType, FieldValidation, LengthBounds, ModelSchema, SortDirection,
    SortSpec,
};
pub use validation::{ValidationError, is_valid_slug, validate_record};
