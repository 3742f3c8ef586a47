use crate::traits::ContentApi;
use crate::types::{
    EnrichedContent, FetchConfig, Headshot, HomepageError, ListItem, ListResponse, Result,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// HTTP client for the content API.
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let url = Url::parse(&format!("{}/{}", self.config.base_url, path))?;
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, mut url: Url) -> Result<T> {
        let start_time = Instant::now();
        // Logged before the key is attached.
        let display_url = url.to_string();

        url.query_pairs_mut().append_pair("apiKey", &self.config.api_key);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(HomepageError::Api {
                status: status.as_u16(),
                url: display_url,
            });
        }

        let body = response.bytes().await?;
        debug!(
            url = %display_url,
            bytes = body.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Fetched"
        );

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ContentApi for Fetcher {
    async fn list(&self, list_id: &str) -> Result<ListResponse> {
        let url = self.endpoint(&format!("lists/{}", list_id))?;
        self.get_json(url).await
    }

    async fn concept_content(&self, concept_id: &str) -> Result<Vec<ListItem>> {
        let mut url = self.endpoint("content")?;
        url.query_pairs_mut().append_pair("isAnnotatedBy", concept_id);
        self.get_json(url).await
    }

    async fn enriched_content(&self, uuid: &str) -> Result<EnrichedContent> {
        let url = self.endpoint(&format!("enrichedcontent/{}", uuid))?;
        self.get_json(url).await
    }

    async fn headshot(&self, api_url: &str) -> Result<Headshot> {
        let url = Url::parse(api_url)?;
        self.get_json(url).await
    }
}
