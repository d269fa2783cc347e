//! Schema fetch methods.

use crate::client::Crud6Client;
use crate::endpoints;
use crate::error::Result;
use crate::models::ModelSchema;

impl Crud6Client {
    /// Fetch and normalize the schema for a model.
    ///
    /// Most callers should go through [`crate::resolver::SchemaResolver`],
    /// which layers caching and request deduplication on top of this.
    pub async fn fetch_schema(&self, model: &str) -> Result<ModelSchema> {
        endpoints::get_schema(
            &self.http,
            &self.base_url,
            self.bearer(),
            model,
            self.max_retries,
        )
        .await
    }
}
