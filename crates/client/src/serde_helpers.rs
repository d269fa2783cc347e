//! Serde helpers for the backend's loosely-typed JSON.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON booleans or 0/1 integers
//!   for schema flag fields.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (required/optional business rules).
//!
//! Invariants / assumptions:
//! - The PHP backend may serialize boolean flags as `true`/`false` or as
//!   `1`/`0` depending on how the schema file was authored.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BoolOrInt {
    Bool(bool),
    Int(i64),
}

/// Deserialize a boolean that may arrive as `true`/`false` or `1`/`0`.
pub fn bool_from_bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match BoolOrInt::deserialize(deserializer)? {
        BoolOrInt::Bool(b) => Ok(b),
        BoolOrInt::Int(i) => Ok(i != 0),
    }
}
