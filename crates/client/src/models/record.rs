//! Record instances and blank-record materialization.
//!
//! A record is an opaque mapping from field name to JSON value, shaped by
//! its schema's `fields` keys. Blank records are materialized from the
//! schema so create forms start from type-appropriate values.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::warn;

use crate::models::schema::ModelSchema;

/// A single row of a model: field name → value, in schema field order.
pub type RecordInstance = IndexMap<String, Value>;

impl ModelSchema {
    /// Materialize a blank record: every field mapped to its declared
    /// `default` when type-compatible, otherwise the blank value of its
    /// type (boolean→false, numeric→0, json→null, everything else→"").
    pub fn blank_record(&self) -> RecordInstance {
        self.fields
            .iter()
            .map(|(name, spec)| {
                let value = match spec.compatible_default() {
                    Some(default) => default.clone(),
                    None => {
                        if spec.default.is_some() {
                            warn!(
                                field = %name,
                                field_type = %spec.field_type,
                                "schema default is not type-compatible; using blank value"
                            );
                        }
                        spec.field_type.blank_value()
                    }
                };
                (name.clone(), value)
            })
            .collect()
    }
}

/// The minimal record shape used when no schema is available, so forms
/// can still bind to something while resolution is pending or failed.
pub fn minimal_record() -> RecordInstance {
    let mut record = RecordInstance::new();
    record.insert("id".to_string(), Value::Null);
    record.insert("name".to_string(), Value::String(String::new()));
    record
}

/// Blank record for a schema, or the minimal fallback shape without one.
pub fn blank_record_or_minimal(schema: Option<&ModelSchema>) -> RecordInstance {
    schema.map_or_else(minimal_record, ModelSchema::blank_record)
}
