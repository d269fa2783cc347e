//! Test data generators using the fake crate.
//!
//! Provides configurable generators for realistic model schemas and
//! records, for tests that need bulk or randomized data rather than the
//! static fixtures.

use fake::Fake;
use fake::faker::lorem::en::Word;
use rand::RngExt;
use rand::seq::IndexedRandom;
use serde_json::Value;

use crate::models::{FieldSpec, FieldType, ModelSchema, RecordInstance, SortDirection};

const FIELD_TYPES: [FieldType; 11] = [
    FieldType::String,
    FieldType::Text,
    FieldType::Integer,
    FieldType::Float,
    FieldType::Boolean,
    FieldType::Date,
    FieldType::DateTime,
    FieldType::Email,
    FieldType::Url,
    FieldType::Json,
    FieldType::Password,
];

/// Generates model schemas with randomized fields.
#[derive(Debug, Clone)]
pub struct SchemaGenerator {
    model: String,
    field_count: usize,
    listable_probability: u32,
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self {
            model: "items".to_string(),
            field_count: 6,
            listable_probability: 80,
        }
    }
}

impl SchemaGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set how many fields to generate (in addition to the `id` field).
    pub fn with_field_count(mut self, count: usize) -> Self {
        self.field_count = count;
        self
    }

    /// Set the percent chance (0-100) that a generated field is listable.
    pub fn with_listable_probability(mut self, percent: u32) -> Self {
        self.listable_probability = percent.min(100);
        self
    }

    /// Generate a schema. The first field is always an auto-increment
    /// integer `id`; remaining field names are unique generated words.
    pub fn generate(&self) -> ModelSchema {
        let mut rng = rand::rng();

        let mut schema = ModelSchema {
            model: self.model.clone(),
            title: format!("{} management", self.model),
            description: String::new(),
            table: self.model.clone(),
            primary_key: "id".to_string(),
            timestamps: rng.random_bool(0.5),
            soft_delete: false,
            permissions: [
                ("read", format!("uri_{}", self.model)),
                ("create", format!("create_{}", self.model)),
                ("update", format!("update_{}", self.model)),
                ("delete", format!("delete_{}", self.model)),
            ]
            .into_iter()
            .map(|(op, slug)| (op.to_string(), slug))
            .collect(),
            default_sort: [("id".to_string(), SortDirection::Asc)].into_iter().collect(),
            fields: Default::default(),
        };

        let mut id_spec = FieldSpec::of_type(FieldType::Integer);
        id_spec.label = "ID".to_string();
        id_spec.readonly = true;
        id_spec.auto_increment = true;
        id_spec.sortable = true;
        schema.fields.insert("id".to_string(), id_spec);

        while schema.fields.len() < self.field_count + 1 {
            let name: String = Word().fake::<String>().to_lowercase();
            if schema.fields.contains_key(&name) {
                continue;
            }

            let field_type = *FIELD_TYPES
                .choose(&mut rng)
                .unwrap_or(&FieldType::String);
            let mut spec = FieldSpec::of_type(field_type);
            spec.label = name.clone();
            spec.listable = rng.random_ratio(self.listable_probability, 100);
            spec.sortable = rng.random_bool(0.5);
            spec.editable = true;
            schema.fields.insert(name, spec);
        }

        schema
    }
}

/// Generate a record conforming to a schema, with plausible values per
/// field type.
pub fn generate_record(schema: &ModelSchema) -> RecordInstance {
    let mut rng = rand::rng();

    schema
        .fields
        .iter()
        .map(|(name, spec)| {
            let value = match spec.field_type {
                FieldType::Integer => Value::from(rng.random_range(0..10_000)),
                FieldType::Float => Value::from(rng.random_range(0..10_000) as f64 / 100.0),
                FieldType::Boolean => Value::Bool(rng.random_bool(0.5)),
                FieldType::Json => serde_json::json!({"key": Word().fake::<String>()}),
                FieldType::Email => {
                    Value::String(format!("{}@example.com", Word().fake::<String>()))
                }
                FieldType::Url => {
                    Value::String(format!("https://example.com/{}", Word().fake::<String>()))
                }
                FieldType::Date => Value::String("2024-01-15".to_string()),
                FieldType::DateTime => Value::String("2024-01-15T10:00:00Z".to_string()),
                _ => Value::String(Word().fake::<String>()),
            };
            (name.clone(), value)
        })
        .collect()
}
