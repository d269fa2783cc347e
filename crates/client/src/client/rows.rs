//! Row data methods.

use crate::client::Crud6Client;
use crate::endpoints::{self, ListParams};
use crate::error::Result;
use crate::models::{MessageResponse, RecordInstance, RowListResponse};

impl Crud6Client {
    /// List rows of a model.
    pub async fn fetch_rows(&self, model: &str, params: &ListParams) -> Result<RowListResponse> {
        endpoints::list_rows(
            &self.http,
            &self.base_url,
            self.bearer(),
            model,
            params,
            self.max_retries,
        )
        .await
    }

    /// Fetch a single row by id.
    pub async fn fetch_row(&self, model: &str, id: &str) -> Result<RecordInstance> {
        endpoints::get_row(
            &self.http,
            &self.base_url,
            self.bearer(),
            model,
            id,
            self.max_retries,
        )
        .await
    }

    /// Create a row.
    pub async fn create_row(
        &self,
        model: &str,
        record: &RecordInstance,
    ) -> Result<MessageResponse> {
        endpoints::create_row(
            &self.http,
            &self.base_url,
            self.bearer(),
            model,
            record,
            self.max_retries,
        )
        .await
    }

    /// Update a row by id.
    pub async fn update_row(
        &self,
        model: &str,
        id: &str,
        record: &RecordInstance,
    ) -> Result<MessageResponse> {
        endpoints::update_row(
            &self.http,
            &self.base_url,
            self.bearer(),
            model,
            id,
            record,
            self.max_retries,
        )
        .await
    }

    /// Delete a row by id.
    pub async fn delete_row(&self, model: &str, id: &str) -> Result<MessageResponse> {
        endpoints::delete_row(
            &self.http,
            &self.base_url,
            self.bearer(),
            model,
            id,
            self.max_retries,
        )
        .await
    }
}
