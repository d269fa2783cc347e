//! Schema endpoint: fetch and normalize a model's schema.

use reqwest::Client;
use serde_json::Value;
use tracing::trace;

use crate::endpoints::request::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::ModelSchema;

/// Fetch a model's schema.
///
/// The backend wraps the schema in an envelope:
/// `{ "message": …, "model": …, "schema": { … } }`. The inner object is
/// what callers get; a payload whose inner object lacks a non-empty
/// `fields` mapping is an [`ClientError::InvalidResponse`].
pub async fn get_schema(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    model: &str,
    max_retries: usize,
) -> Result<ModelSchema> {
    let url = format!("{}/api/crud6/{}/schema", base_url, model);

    let mut builder = client.get(&url).header("Accept", "application/json");
    if let Some(token) = token {
        builder = builder.bearer_auth(token);
    }

    let response = send_request_with_retry(builder, max_retries, "/schema", "GET").await?;
    let payload: Value = response.json().await?;
    trace!(model, "schema payload received");

    normalize_schema_payload(payload)
}

/// Unwrap a schema response payload to the inner [`ModelSchema`].
///
/// Accepts either the standard envelope or a bare schema object (older
/// backends returned the schema directly). Rejects payloads whose schema
/// has no `fields` mapping: "loaded with no fields" is a normalization
/// failure, not an empty schema.
pub fn normalize_schema_payload(payload: Value) -> Result<ModelSchema> {
    let envelope_model = payload
        .get("model")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let inner = match payload.get("schema") {
        Some(inner) => inner.clone(),
        None => payload,
    };

    let mut schema: ModelSchema = serde_json::from_value(inner)
        .map_err(|e| ClientError::InvalidResponse(format!("malformed schema payload: {e}")))?;

    if !schema.has_fields() {
        return Err(ClientError::InvalidResponse(
            "schema payload has no fields mapping".to_string(),
        ));
    }

    // Older backends omit `model` from the inner object; the envelope
    // carries it.
    if schema.model.is_empty() {
        schema.model = envelope_model;
    }

    Ok(schema)
}
