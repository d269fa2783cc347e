//! Row data endpoints: list, fetch, create, update, delete.
//!
//! These are opaque to schema resolution; they move record data for a
//! model whose schema the caller already holds.

use reqwest::{Client, RequestBuilder};

use crate::endpoints::request::send_request_with_retry;
use crate::error::Result;
use crate::models::{MessageResponse, RecordInstance, RowListResponse, SortDirection};

/// Query parameters for row listings.
///
/// Serialized in the backend's sprunje style:
/// `size`, `page`, `sorts[field]=asc`, `filters[field]=value`.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub size: Option<u64>,
    pub page: Option<u64>,
    pub sorts: Vec<(String, SortDirection)>,
    pub filters: Vec<(String, String)>,
}

impl ListParams {
    /// Flatten into query pairs.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(size) = self.size {
            pairs.push(("size".to_string(), size.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        for (field, direction) in &self.sorts {
            pairs.push((format!("sorts[{}]", field), direction.as_str().to_string()));
        }
        for (field, value) in &self.filters {
            pairs.push((format!("filters[{}]", field), value.clone()));
        }
        pairs
    }
}

fn with_auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// List rows of a model.
pub async fn list_rows(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    model: &str,
    params: &ListParams,
    max_retries: usize,
) -> Result<RowListResponse> {
    let url = format!("{}/api/crud6/{}", base_url, model);

    let builder = with_auth(client.get(&url), token).query(&params.query_pairs());
    let response = send_request_with_retry(builder, max_retries, "/rows", "GET").await?;

    Ok(response.json().await?)
}

/// Fetch a single row by id.
pub async fn get_row(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    model: &str,
    id: &str,
    max_retries: usize,
) -> Result<RecordInstance> {
    let url = format!("{}/api/crud6/{}/{}", base_url, model, id);

    let builder = with_auth(client.get(&url), token);
    let response = send_request_with_retry(builder, max_retries, "/row", "GET").await?;

    Ok(response.json().await?)
}

/// Create a row.
pub async fn create_row(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    model: &str,
    record: &RecordInstance,
    max_retries: usize,
) -> Result<MessageResponse> {
    let url = format!("{}/api/crud6/{}", base_url, model);

    let builder = with_auth(client.post(&url), token).json(record);
    let response = send_request_with_retry(builder, max_retries, "/rows", "POST").await?;

    Ok(response.json().await?)
}

/// Update a row by id.
pub async fn update_row(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    model: &str,
    id: &str,
    record: &RecordInstance,
    max_retries: usize,
) -> Result<MessageResponse> {
    let url = format!("{}/api/crud6/{}/{}", base_url, model, id);

    let builder = with_auth(client.put(&url), token).json(record);
    let response = send_request_with_retry(builder, max_retries, "/row", "PUT").await?;

    Ok(response.json().await?)
}

/// Delete a row by id.
pub async fn delete_row(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    model: &str,
    id: &str,
    max_retries: usize,
) -> Result<MessageResponse> {
    let url = format!("{}/api/crud6/{}/{}", base_url, model, id);

    let builder = with_auth(client.delete(&url), token);
    let response = send_request_with_retry(builder, max_retries, "/row", "DELETE").await?;

    Ok(response.json().await?)
}
