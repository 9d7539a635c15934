use async_trait::async_trait;
use serde_json::Value;

use crate::BoxError;

/// Where the raw Google product taxonomy text comes from.
#[async_trait]
pub trait TaxonomySource: Send + Sync {
    /// Fetch the full feed, one `<id> - <name>` entry per line.
    async fn fetch_taxonomy(&self) -> Result<String, BoxError>;
}

/// Pushes mapped catalog entries to the Content API.
///
/// Implementations own the credential; callers only hand over the payload.
#[async_trait]
pub trait ProductSubmitter: Send + Sync {
    /// Submit one product resource and return the parsed response body.
    async fn submit_product(&self, payload: &Value) -> Result<Value, BoxError>;
}
