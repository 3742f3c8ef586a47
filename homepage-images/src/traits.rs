use crate::types::{EnrichedContent, Headshot, ListItem, ListResponse, Result};
use async_trait::async_trait;

/// The upstream content API. Every call is a single GET; implementations
/// report failures instead of retrying.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Curated list by id.
    async fn list(&self, list_id: &str) -> Result<ListResponse>;

    /// Raw content references annotated by a concept, in API order.
    async fn concept_content(&self, concept_id: &str) -> Result<Vec<ListItem>>;

    /// Enriched content document for one article.
    async fn enriched_content(&self, uuid: &str) -> Result<EnrichedContent>;

    /// Person resource at an arbitrary API URL taken from annotation data.
    async fn headshot(&self, api_url: &str) -> Result<Headshot>;
}

/// Where the lead section's items are kept for reuse outside this crate.
#[async_trait]
pub trait BaseStore: Send + Sync {
    async fn save_base(&self, items: &[ListItem]) -> Result<()>;

    async fn base_items(&self) -> Result<Vec<ListItem>>;
}
