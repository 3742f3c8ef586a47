use crate::traits::ContentApi;
use crate::types::{Annotation, Headshot, Result};
use tracing::{error, info};

/// Annotations of one article, used to find opinion pieces and their authors.
pub async fn get_author_annotations(api: &dyn ContentApi, uuid: &str) -> Result<Vec<Annotation>> {
    info!(action = "getAuthor", uuid);

    match api.enriched_content(uuid).await {
        Ok(content) => Ok(content.annotations),
        Err(e) => {
            error!(error = %e, uuid, "Error getting author");
            Err(e)
        }
    }
}

pub async fn get_headshot(api: &dyn ContentApi, api_url: &str) -> Result<Headshot> {
    info!(action = "getHeadshot", api_url);

    api.headshot(api_url).await.map_err(|e| {
        error!(error = %e, api_url, "Error getting headshot");
        e
    })
}
