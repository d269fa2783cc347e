//! Schema models for backend-defined resource types.
//!
//! A CRUD6 backend describes each resource type ("model") with a schema:
//! display metadata, storage hints, per-operation permission slugs, a
//! default sort, and an ordered mapping of field specifications. The UI
//! renders tables and forms entirely from this description.
//!
//! # Invariants
//! - `fields` keys are unique; iteration order is display order.
//! - Absent permission entries mean "no permission" (fail closed).
//! - Boolean flags tolerate `1`/`0` as well as `true`/`false` on the wire.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::serde_helpers::bool_from_bool_or_int;

/// Supported field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Text,
    Integer,
    Float,
    Boolean,
    Date,
    DateTime,
    Email,
    Url,
    Json,
    Password,
}

impl FieldType {
    /// Wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Email => "email",
            Self::Url => "url",
            Self::Json => "json",
            Self::Password => "password",
        }
    }

    /// The blank value a field of this type gets in a new record.
    pub fn blank_value(&self) -> Value {
        match self {
            Self::Boolean => Value::Bool(false),
            Self::Integer => Value::from(0),
            Self::Float => Value::from(0.0),
            Self::Json => Value::Null,
            _ => Value::String(String::new()),
        }
    }

    /// Whether a JSON value is compatible with this type.
    ///
    /// Used both to vet a field's declared `default` and to type-check
    /// record values during validation. `Json` fields accept anything.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::Boolean => value.is_boolean(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Float => value.is_number(),
            Self::Json => true,
            _ => value.is_string(),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four operations the UI gates with permission slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrudOperation {
    Read,
    Create,
    Update,
    Delete,
}

impl CrudOperation {
    /// Key under which the schema's `permissions` map stores this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for CrudOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length bounds inside a field's validation bag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LengthBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}

/// Per-field validation constraints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldValidation {
    #[serde(default, deserialize_with = "bool_from_bool_or_int")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<LengthBounds>,
    /// Value must be a slug (lowercase alphanumeric plus `-` and `_`).
    #[serde(default, deserialize_with = "bool_from_bool_or_int")]
    pub slug: bool,
}

/// Specification of one column/form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub label: String,
    #[serde(default, deserialize_with = "bool_from_bool_or_int")]
    pub required: bool,
    #[serde(default, deserialize_with = "bool_from_bool_or_int")]
    pub readonly: bool,
    #[serde(default, deserialize_with = "bool_from_bool_or_int")]
    pub sortable: bool,
    #[serde(default, deserialize_with = "bool_from_bool_or_int")]
    pub filterable: bool,
    #[serde(default, deserialize_with = "bool_from_bool_or_int")]
    pub searchable: bool,
    /// Whether the field appears in list views. Unlike the other flags
    /// this defaults to true: a field is listed unless opted out.
    #[serde(default = "default_true", deserialize_with = "bool_from_bool_or_int")]
    pub listable: bool,
    #[serde(default, deserialize_with = "bool_from_bool_or_int")]
    pub editable: bool,
    #[serde(default, deserialize_with = "bool_from_bool_or_int")]
    pub auto_increment: bool,
    /// Type-appropriate default value for blank records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
    /// Display-width hint for list layouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

fn default_true() -> bool {
    true
}

impl FieldSpec {
    /// Create a minimal spec of the given type; everything else defaulted.
    pub fn of_type(field_type: FieldType) -> Self {
        Self {
            field_type,
            label: String::new(),
            required: false,
            readonly: false,
            sortable: false,
            filterable: false,
            searchable: false,
            listable: true,
            editable: false,
            auto_increment: false,
            default: None,
            validation: None,
            width: None,
        }
    }

    /// The declared `default`, only if it is type-compatible.
    ///
    /// A boolean field with `"default": "yes"` is a schema authoring bug;
    /// the blank value of the type is used instead.
    pub fn compatible_default(&self) -> Option<&Value> {
        self.default
            .as_ref()
            .filter(|value| self.field_type.accepts(value))
    }
}

/// Sort projection derived from a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Backend-provided structural description of one resource type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSchema {
    /// Unique model identifier (e.g. "groups"). May be filled from the
    /// response envelope when the inner payload omits it.
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Backend storage hints, opaque to the UI.
    #[serde(default)]
    pub table: String,
    #[serde(default = "default_primary_key")]
    pub primary_key: String,
    #[serde(default, deserialize_with = "bool_from_bool_or_int")]
    pub timestamps: bool,
    #[serde(default, deserialize_with = "bool_from_bool_or_int")]
    pub soft_delete: bool,
    /// Operation name → permission slug. Absent entries deny.
    #[serde(default)]
    pub permissions: HashMap<String, String>,
    /// Field name → direction, in priority order.
    #[serde(default)]
    pub default_sort: IndexMap<String, SortDirection>,
    /// Field name → spec; iteration order is display order.
    #[serde(default)]
    pub fields: IndexMap<String, FieldSpec>,
}

fn default_primary_key() -> String {
    "id".to_string()
}

impl ModelSchema {
    /// Whether this schema carries a usable (non-empty) field mapping.
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Permission slug for an operation, if the schema declares one.
    pub fn permission_slug(&self, operation: CrudOperation) -> Option<&str> {
        self.permissions.get(operation.as_str()).map(String::as_str)
    }

    /// Fields to show in list views, in schema order, with their specs
    /// (carrying the `width` hints for layout).
    pub fn list_columns(&self) -> Vec<(&str, &FieldSpec)> {
        self.fields
            .iter()
            .filter(|(_, spec)| spec.listable)
            .map(|(name, spec)| (name.as_str(), spec))
            .collect()
    }

    /// The sort to apply when none was chosen by the user: the first
    /// `default_sort` entry, falling back to primary key ascending.
    pub fn default_sort_spec(&self) -> SortSpec {
        self.default_sort
            .iter()
            .next()
            .map(|(field, direction)| SortSpec {
                field: field.clone(),
                direction: *direction,
            })
            .unwrap_or_else(|| SortSpec {
                field: self.primary_key.clone(),
                direction: SortDirection::Asc,
            })
    }
}
