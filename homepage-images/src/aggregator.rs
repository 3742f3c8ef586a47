use crate::fetcher::Fetcher;
use crate::page_structure::{
    PageStructure, Section, SectionSource, DEDUPED_LAYOUTS, LANDSCAPE_LAYOUT,
};
use crate::sources::{get_author_annotations, get_headshot, get_list, get_teaser};
use crate::state::MemoryBaseStore;
use crate::traits::{BaseStore, ContentApi};
use crate::types::{
    FetchConfig, Headshot, ImageKind, ImageRecord, ListItem, Result, DEFAULT_EDITION,
    INTERNATIONAL_EDITION,
};
use crate::utils::content::{dedupe_adjacent, extract_uuid, is_author, is_opinion};
use crate::utils::url::{article_url, format_headshot_url, format_image_url};
use chrono::Utc;
use futures::future;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Headshot checks for a landscape lead section, which may hold an opinion
/// piece regardless of the section's own setting.
const LANDSCAPE_HEADSHOT_CHECKS: usize = 2;

/// Labels shared by every record produced from one fetched list.
struct SectionContext {
    edition: String,
    layout: String,
    section_id: usize,
}

/// Walks the page structure for an edition and collects every image the
/// homepage would show.
pub struct HomepageAggregator {
    api: Arc<dyn ContentApi>,
    structure: PageStructure,
    base_store: Arc<dyn BaseStore>,
    config: FetchConfig,
}

impl HomepageAggregator {
    pub fn new(api: Arc<dyn ContentApi>, structure: PageStructure, config: FetchConfig) -> Self {
        Self {
            api,
            structure,
            base_store: Arc::new(MemoryBaseStore::new()),
            config,
        }
    }

    /// Aggregator backed by the HTTP content API client.
    pub fn from_config(config: FetchConfig, structure: PageStructure) -> Result<Self> {
        let fetcher = Fetcher::new(config.clone())?;
        Ok(Self::new(Arc::new(fetcher), structure, config))
    }

    pub fn with_base_store(mut self, base_store: Arc<dyn BaseStore>) -> Self {
        self.base_store = base_store;
        self
    }

    pub fn base_store(&self) -> Arc<dyn BaseStore> {
        self.base_store.clone()
    }

    pub async fn front_page(&self) -> Vec<ImageRecord> {
        self.get_all_images(DEFAULT_EDITION).await
    }

    /// Images for every section of `edition`, in section order. Failed
    /// lookups are logged and left out; this never fails as a whole.
    pub async fn get_all_images(&self, edition: &str) -> Vec<ImageRecord> {
        info!(edition, sections = self.structure.sections.len(), "Collecting homepage images");

        let mut all_images = Vec::new();

        for (index, section) in self.structure.sections.iter().enumerate() {
            match section.source_for(edition) {
                SectionSource::List(list_id) => {
                    let images = self.section_images(index, section, list_id, edition).await;
                    all_images.extend(images);
                }
                SectionSource::Hidden
                    if edition == INTERNATIONAL_EDITION
                        && !section.international_variants.is_empty() =>
                {
                    let images = self.variant_images(index, section, edition).await;
                    all_images.extend(images);
                }
                SectionSource::Hidden => {
                    debug!(section = %section.name, edition, "Section hidden");
                }
                SectionSource::Absent => {
                    debug!(section = %section.name, edition, "Section has no entry for edition");
                }
            }
        }

        info!(edition, images = all_images.len(), "Collected homepage images");
        all_images
    }

    async fn section_images(
        &self,
        index: usize,
        section: &Section,
        list_id: &str,
        edition: &str,
    ) -> Vec<ImageRecord> {
        let list = match get_list(self.api.as_ref(), list_id, section.is_concept).await {
            Ok(list) => list,
            Err(_) => {
                warn!(section = %section.name, "Skipping section without a list");
                return Vec::new();
            }
        };

        let layout = list.layout_hint.unwrap_or_else(|| section.layout.clone());
        let mut items = list.items;

        if index == 0 {
            if let Err(e) = self.base_store.save_base(&items).await {
                warn!(error = %e, "Failed to save base items");
            }
        }

        if DEDUPED_LAYOUTS.contains(&layout.as_str()) {
            items = dedupe_adjacent(items);
        }

        let headshot_checks = if index == 0 && layout == LANDSCAPE_LAYOUT {
            Some(LANDSCAPE_HEADSHOT_CHECKS)
        } else {
            section.check_headshots
        };

        let context = SectionContext {
            edition: edition.to_string(),
            layout,
            section_id: index,
        };

        let mut records = self.images_for(&items, &context).await;
        if let Some(count) = headshot_checks {
            records.extend(self.headshots_for(&items, count, &context).await);
        }

        debug!(section = %section.name, records = records.len(), "Section done");
        records
    }

    async fn variant_images(&self, index: usize, section: &Section, edition: &str) -> Vec<ImageRecord> {
        let mut records = Vec::new();

        for variant in &section.international_variants {
            let list = match get_list(self.api.as_ref(), &variant.list_id, section.is_concept).await {
                Ok(list) => list,
                Err(_) => {
                    warn!(section = %section.name, region = %variant.region, "Skipping variant without a list");
                    continue;
                }
            };

            let items = dedupe_adjacent(list.items);
            let context = SectionContext {
                edition: format!("{}__{}", edition, variant.region),
                layout: section.layout.clone(),
                section_id: index,
            };

            records.extend(self.images_for(&items, &context).await);
            if let Some(count) = section.check_headshots {
                records.extend(self.headshots_for(&items, count, &context).await);
            }
        }

        records
    }

    /// One record per layout position whose item has an image.
    async fn images_for(&self, items: &[ListItem], context: &SectionContext) -> Vec<ImageRecord> {
        let positions = self.structure.positions(&context.layout);

        stream::iter(positions.iter().copied())
            .map(|position| self.image_at(items, position, context))
            .buffered(self.concurrency())
            .filter_map(future::ready)
            .collect()
            .await
    }

    async fn image_at(
        &self,
        items: &[ListItem],
        position: usize,
        context: &SectionContext,
    ) -> Option<ImageRecord> {
        let uuid = match items.get(position).and_then(|item| extract_uuid(&item.id)) {
            Some(uuid) => uuid,
            None => {
                debug!(action = "getTeaser", layout = %context.layout, position, "No content id at position");
                return None;
            }
        };
        let teaser = get_teaser(self.api.as_ref(), &uuid).await.ok()?;
        let image = teaser.images.first()?;

        Some(ImageRecord {
            timestamp: Utc::now().timestamp_millis(),
            edition: context.edition.clone(),
            section_layout: context.layout.clone(),
            section_id: context.section_id,
            article_uuid: uuid,
            article_url: article_url(teaser.web_url.as_deref()),
            section_pos: position,
            image_type: teaser.kind,
            original_url: image.binary_url.clone(),
            formatted_url: format_image_url(image, &self.config),
            is_top_half: self.is_top_half(context, position),
            is_video: Some(teaser.is_video),
        })
    }

    /// Author headshots for opinion pieces at positions `1..item_count`.
    /// The lead item is never checked.
    async fn headshots_for(
        &self,
        items: &[ListItem],
        item_count: usize,
        context: &SectionContext,
    ) -> Vec<ImageRecord> {
        let per_position: Vec<Vec<ImageRecord>> = stream::iter(1..item_count)
            .map(|position| self.headshots_at(items, position, context))
            .buffered(self.concurrency())
            .collect()
            .await;

        per_position.into_iter().flatten().collect()
    }

    async fn headshots_at(
        &self,
        items: &[ListItem],
        position: usize,
        context: &SectionContext,
    ) -> Vec<ImageRecord> {
        let mut headshots = Vec::new();

        let uuid = match items.get(position).and_then(|item| extract_uuid(&item.id)) {
            Some(uuid) => uuid,
            None => {
                debug!(action = "getAuthor", layout = %context.layout, position, "No content id at position");
                return headshots;
            }
        };

        let annotations = match get_author_annotations(self.api.as_ref(), &uuid).await {
            Ok(annotations) => annotations,
            Err(_) => return headshots,
        };

        if !annotations.iter().any(is_opinion) {
            return headshots;
        }

        for annotation in annotations.iter().filter(|a| is_author(a)) {
            let api_url = match annotation.api_url.as_deref() {
                Some(api_url) => api_url,
                None => continue,
            };

            let image_url = match get_headshot(self.api.as_ref(), api_url).await {
                Ok(Headshot {
                    image_url: Some(image_url),
                }) if !image_url.is_empty() => image_url,
                _ => continue,
            };

            headshots.push(ImageRecord {
                timestamp: Utc::now().timestamp_millis(),
                edition: context.edition.clone(),
                section_layout: context.layout.clone(),
                section_id: context.section_id,
                article_uuid: uuid.clone(),
                article_url: None,
                section_pos: position,
                image_type: ImageKind::Headshot,
                formatted_url: format_headshot_url(&image_url),
                original_url: image_url,
                is_top_half: self.is_top_half(context, position),
                is_video: None,
            });
        }

        headshots
    }

    /// Only the lead section is rendered above the fold.
    fn is_top_half(&self, context: &SectionContext, position: usize) -> bool {
        context.section_id == 0 && self.structure.is_top_half(&context.layout, position)
    }

    fn concurrency(&self) -> usize {
        self.config.max_concurrent_requests.max(1)
    }
}
