use serde::{Deserialize, Serialize};
use std::env;

/// Edition used when the caller does not name one.
pub const DEFAULT_EDITION: &str = "uk";

/// Edition whose hidden sections may expand into regional variants.
pub const INTERNATIONAL_EDITION: &str = "international";

/// One entry of a curated list or concept query, as returned by the content API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: String,
    #[serde(rename = "apiUrl", default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub items: Vec<ListItem>,
    #[serde(rename = "layoutHint", default, skip_serializing_if = "Option::is_none")]
    pub layout_hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "binaryUrl", default)]
    pub binary_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlternativeImages {
    #[serde(rename = "promotionalImage", default)]
    pub promotional_image: Option<ImageDescriptor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MainImage {
    #[serde(default)]
    pub members: Vec<ImageDescriptor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub predicate: String,
    #[serde(rename = "apiUrl", default)]
    pub api_url: Option<String>,
    #[serde(rename = "prefLabel", default)]
    pub pref_label: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// The subset of an enriched-content document this crate reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnrichedContent {
    #[serde(rename = "webUrl", default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(rename = "alternativeImages", default)]
    pub alternative_images: Option<AlternativeImages>,
    #[serde(rename = "mainImage", default)]
    pub main_image: Option<MainImage>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// An author's person resource; only the headshot link matters here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Headshot {
    #[serde(rename = "_imageUrl", default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Main,
    Promo,
    Headshot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teaser {
    pub kind: ImageKind,
    pub images: Vec<ImageDescriptor>,
    pub web_url: Option<String>,
    pub is_video: bool,
}

/// A single image found on the homepage. The field names are part of the
/// JSON output consumed downstream and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub timestamp: i64,
    pub edition: String,
    #[serde(rename = "sectionLayout")]
    pub section_layout: String,
    #[serde(rename = "sectionId")]
    pub section_id: usize,
    #[serde(rename = "articleUUID")]
    pub article_uuid: String,
    #[serde(rename = "articleUrl")]
    pub article_url: Option<String>,
    #[serde(rename = "sectionPos")]
    pub section_pos: usize,
    #[serde(rename = "imageType")]
    pub image_type: ImageKind,
    #[serde(rename = "originalUrl")]
    pub original_url: String,
    #[serde(rename = "formattedURL")]
    pub formatted_url: String,
    #[serde(rename = "isTopHalf")]
    pub is_top_half: bool,
    #[serde(rename = "isVideo", default, skip_serializing_if = "Option::is_none")]
    pub is_video: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub api_key: String,
    pub base_url: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub image_service_url: String,
    pub image_source: String,
    pub image_width: u32,
    /// In-flight teaser/headshot lookups per section. 1 keeps requests serial.
    pub max_concurrent_requests: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "http://api.ft.com".to_string(),
            user_agent: "Homepage-Images/1.0".to_string(),
            timeout_seconds: 30,
            image_service_url: "https://www.ft.com/__origami/service/image/v2/images/raw"
                .to_string(),
            image_source: "janetbot".to_string(),
            image_width: 700,
            max_concurrent_requests: 1,
        }
    }
}

impl FetchConfig {
    /// Build the configuration from the process environment. Outside of
    /// production (`APP_ENV` unset or not `production`) a local `.env` file is
    /// loaded first.
    pub fn from_env() -> Result<Self> {
        let is_production = env::var("APP_ENV")
            .map(|mode| mode == "production")
            .unwrap_or(false);
        if !is_production {
            dotenvy::dotenv().ok();
        }

        let config = Self::from_vars(|key| env::var(key).ok())?;
        config.log_keys();
        Ok(config)
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("FT_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| HomepageError::MissingConfig("FT_API_KEY".to_string()))?;

        let mut config = Self {
            api_key,
            ..Self::default()
        };

        if let Some(base_url) = lookup("FT_API_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(service) = lookup("IMAGE_SERVICE_URL") {
            config.image_service_url = service.trim_end_matches('/').to_string();
        }
        if let Some(width) = lookup("IMAGE_WIDTH") {
            config.image_width = width
                .parse()
                .map_err(|_| HomepageError::InvalidConfig(format!("IMAGE_WIDTH={}", width)))?;
        }
        if let Some(limit) = lookup("MAX_CONCURRENT_REQUESTS") {
            config.max_concurrent_requests = limit
                .parse()
                .ok()
                .filter(|n: &usize| *n > 0)
                .ok_or_else(|| {
                    HomepageError::InvalidConfig(format!("MAX_CONCURRENT_REQUESTS={}", limit))
                })?;
        }

        Ok(config)
    }

    fn log_keys(&self) {
        let preview: String = self.api_key.chars().take(4).collect();
        tracing::debug!(
            api_key = %format!("{}...({} chars)", preview, self.api_key.len()),
            base_url = %self.base_url,
            max_concurrent_requests = self.max_concurrent_requests,
            "Config loaded"
        );
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HomepageError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    Api { status: u16, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown layout {layout} in section {section}")]
    UnknownLayout { section: String, layout: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HomepageError>;
