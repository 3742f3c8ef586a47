use crate::traits::ContentApi;
use crate::types::{ListItem, ListResponse, Result};
use crate::utils::content::dedupe_adjacent;
use tracing::{error, info};

/// Most items kept from a concept query.
pub const CONCEPT_LIST_LIMIT: usize = 6;

/// Fetch the items behind a section. Concept queries are deduplicated and
/// capped; curated lists come back exactly as the API returned them.
pub async fn get_list(api: &dyn ContentApi, list_id: &str, is_concept: bool) -> Result<ListResponse> {
    info!(action = "getList", list_id, is_concept);

    let response = if is_concept {
        api.concept_content(list_id).await.map(|raw| ListResponse {
            items: concept_items(raw),
            layout_hint: None,
        })
    } else {
        api.list(list_id).await
    };

    response.map_err(|e| {
        error!(error = %e, list_id, "Error getting list");
        e
    })
}

pub fn concept_items(raw: Vec<ListItem>) -> Vec<ListItem> {
    let mut items = dedupe_adjacent(raw);
    items.truncate(CONCEPT_LIST_LIMIT);
    items
}
