//! Record validation against schema field constraints.
//!
//! Checks a [`RecordInstance`] against each field's flags and `validation`
//! bag before submission: required presence, string length bounds, slug
//! format, and value/type compatibility. Purely local; never performs I/O.
//!
//! # Invariants
//! - Readonly and auto-increment fields are never validated (the backend
//!   owns them).
//! - A missing optional field is not an error.

use serde_json::Value;
use thiserror::Error;

use crate::models::record::RecordInstance;
use crate::models::schema::{FieldType, ModelSchema};

/// A single validation failure for one field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("field `{field}` is required")]
    Required { field: String },

    #[error("field `{field}` must be at least {min} characters")]
    TooShort { field: String, min: u64 },

    #[error("field `{field}` must be at most {max} characters")]
    TooLong { field: String, max: u64 },

    #[error("field `{field}` must be a valid slug")]
    InvalidSlug { field: String },

    #[error("field `{field}` expects a {expected} value")]
    TypeMismatch { field: String, expected: FieldType },
}

/// Whether a string is a valid slug: non-empty, lowercase alphanumeric
/// plus `-` and `_`.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Validate a record against its schema. Returns every failure found,
/// in schema field order; an empty vec means the record is acceptable.
pub fn validate_record(schema: &ModelSchema, record: &RecordInstance) -> Vec<ValidationError> {
    let mut failures = Vec::new();

    for (name, spec) in &schema.fields {
        if spec.readonly || spec.auto_increment {
            continue;
        }

        let required = spec.required
            || spec
                .validation
                .as_ref()
                .is_some_and(|validation| validation.required);

        let value = record.get(name);
        let blank = match value {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        };
        if blank {
            if required {
                failures.push(ValidationError::Required {
                    field: name.clone(),
                });
            }
            continue;
        }
        let Some(value) = value else { continue };
        if !spec.field_type.accepts(value) {
            failures.push(ValidationError::TypeMismatch {
                field: name.clone(),
                expected: spec.field_type,
            });
            continue;
        }

        if let (Some(validation), Some(text)) = (spec.validation.as_ref(), value.as_str()) {
            if let Some(bounds) = validation.length {
                let len = text.chars().count() as u64;
                if let Some(min) = bounds.min {
                    if len < min {
                        failures.push(ValidationError::TooShort {
                            field: name.clone(),
                            min,
                        });
                    }
                }
                if let Some(max) = bounds.max {
                    if len > max {
                        failures.push(ValidationError::TooLong {
                            field: name.clone(),
                            max,
                        });
                    }
                }
            }
            if validation.slug && !is_valid_slug(text) {
                failures.push(ValidationError::InvalidSlug {
                    field: name.clone(),
                });
            }
        }
    }

    failures
}
