use crate::traits::ContentApi;
use crate::types::{EnrichedContent, ImageKind, Result, Teaser};
use crate::utils::content::is_video;
use tracing::{error, info};

pub async fn get_teaser(api: &dyn ContentApi, uuid: &str) -> Result<Teaser> {
    info!(action = "getTeaser", uuid);

    match api.enriched_content(uuid).await {
        Ok(content) => Ok(Teaser::from_content(&content)),
        Err(e) => {
            error!(error = %e, uuid, "Error getting teaser");
            Err(e)
        }
    }
}

impl Teaser {
    /// A promotional image wins over the main image set.
    pub fn from_content(content: &EnrichedContent) -> Self {
        let promo = content
            .alternative_images
            .as_ref()
            .and_then(|alt| alt.promotional_image.clone());

        if let Some(image) = promo {
            return Self {
                kind: ImageKind::Promo,
                images: vec![image],
                web_url: content.web_url.clone(),
                is_video: is_video(&content.types),
            };
        }

        if let Some(main) = &content.main_image {
            return Self {
                kind: ImageKind::Main,
                images: main.members.clone(),
                web_url: content.web_url.clone(),
                is_video: is_video(&content.types),
            };
        }

        Self {
            kind: ImageKind::Main,
            images: Vec::new(),
            web_url: None,
            is_video: false,
        }
    }
}
