// Shared fixtures for the integration tests. Not every test binary uses
// every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use homepage_images::{
    AlternativeImages, Annotation, ContentApi, EnrichedContent, Headshot, HomepageError,
    ImageDescriptor, LayoutRule, ListItem, ListResponse, MainImage, PageStructure, Result,
    Section,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, Once};
use std::time::Duration;

pub use homepage_images::utils::content::{HAS_AUTHOR, OPINION_LABEL, VIDEO_TYPE};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Deterministic content UUID for fixture number `n`.
pub fn uuid(n: u32) -> String {
    format!("00000000-0000-4000-8000-{:012}", n)
}

pub fn item(n: u32) -> ListItem {
    ListItem {
        id: format!("http://api.ft.com/things/{}", uuid(n)),
        api_url: Some(format!("http://api.ft.com/content/{}", uuid(n))),
    }
}

pub fn image(url: &str) -> ImageDescriptor {
    ImageDescriptor {
        id: None,
        binary_url: url.to_string(),
    }
}

pub fn promo_content(n: u32) -> EnrichedContent {
    EnrichedContent {
        web_url: Some(format!("https://www.ft.com/content/{}", uuid(n))),
        alternative_images: Some(AlternativeImages {
            promotional_image: Some(image(&format!("https://img/promo-{}.jpg", n))),
        }),
        ..EnrichedContent::default()
    }
}

pub fn main_content(n: u32) -> EnrichedContent {
    EnrichedContent {
        web_url: Some(format!("https://www.ft.com/content/{}", uuid(n))),
        main_image: Some(MainImage {
            members: vec![
                image(&format!("https://img/main-{}-a.jpg", n)),
                image(&format!("https://img/main-{}-b.jpg", n)),
            ],
        }),
        ..EnrichedContent::default()
    }
}

pub fn author(name: &str) -> Annotation {
    Annotation {
        predicate: HAS_AUTHOR.to_string(),
        api_url: Some(format!("http://api.ft.com/people/{}", name)),
        pref_label: Some(name.to_string()),
        kind: Some("PERSON".to_string()),
    }
}

pub fn opinion_genre() -> Annotation {
    Annotation {
        predicate: "http://www.ft.com/ontology/classification/isClassifiedBy".to_string(),
        api_url: None,
        pref_label: Some(OPINION_LABEL.to_string()),
        kind: Some("GENRE".to_string()),
    }
}

/// Opinion piece by the named authors, with a main image.
pub fn opinion_content(n: u32, authors: &[&str]) -> EnrichedContent {
    let mut content = main_content(n);
    content.annotations.push(opinion_genre());
    content.annotations.extend(authors.iter().map(|a| author(a)));
    content
}

pub fn headshot_url(name: &str) -> String {
    format!("https://images.ft.com/people/{}.png?source=next", name)
}

/// In-memory content API that records every request it serves.
#[derive(Default)]
pub struct FakeContentApi {
    pub lists: HashMap<String, ListResponse>,
    pub concepts: HashMap<String, Vec<ListItem>>,
    pub content: HashMap<String, EnrichedContent>,
    pub headshots: HashMap<String, Headshot>,
    pub delays_ms: HashMap<String, u64>,
    calls: Mutex<Vec<String>>,
}

impl FakeContentApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, list_id: &str, items: Vec<ListItem>) -> Self {
        self.lists.insert(
            list_id.to_string(),
            ListResponse {
                items,
                layout_hint: None,
            },
        );
        self
    }

    pub fn with_hinted_list(mut self, list_id: &str, items: Vec<ListItem>, hint: &str) -> Self {
        self.lists.insert(
            list_id.to_string(),
            ListResponse {
                items,
                layout_hint: Some(hint.to_string()),
            },
        );
        self
    }

    pub fn with_concept(mut self, concept_id: &str, items: Vec<ListItem>) -> Self {
        self.concepts.insert(concept_id.to_string(), items);
        self
    }

    pub fn with_content(mut self, n: u32, content: EnrichedContent) -> Self {
        self.content.insert(uuid(n), content);
        self
    }

    pub fn with_headshot(mut self, name: &str) -> Self {
        self.headshots.insert(
            format!("http://api.ft.com/people/{}", name),
            Headshot {
                image_url: Some(headshot_url(name)),
            },
        );
        self
    }

    pub fn with_delay(mut self, n: u32, delay_ms: u64) -> Self {
        self.delays_ms.insert(uuid(n), delay_ms);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with(prefix))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn not_found(url: String) -> HomepageError {
        HomepageError::Api { status: 404, url }
    }
}

#[async_trait]
impl ContentApi for FakeContentApi {
    async fn list(&self, list_id: &str) -> Result<ListResponse> {
        self.record(format!("list:{}", list_id));
        self.lists
            .get(list_id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("lists/{}", list_id)))
    }

    async fn concept_content(&self, concept_id: &str) -> Result<Vec<ListItem>> {
        self.record(format!("concept:{}", concept_id));
        self.concepts
            .get(concept_id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("content?isAnnotatedBy={}", concept_id)))
    }

    async fn enriched_content(&self, uuid: &str) -> Result<EnrichedContent> {
        self.record(format!("content:{}", uuid));
        if let Some(delay) = self.delays_ms.get(uuid) {
            tokio::time::sleep(Duration::from_millis(*delay)).await;
        }
        self.content
            .get(uuid)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("enrichedcontent/{}", uuid)))
    }

    async fn headshot(&self, api_url: &str) -> Result<Headshot> {
        self.record(format!("headshot:{}", api_url));
        self.headshots
            .get(api_url)
            .cloned()
            .ok_or_else(|| Self::not_found(api_url.to_string()))
    }
}

pub fn layout(positions: &[usize], top_half: &[usize]) -> LayoutRule {
    LayoutRule {
        positions: positions.to_vec(),
        top_half: top_half.to_vec(),
    }
}

/// Section listed under the same id in both editions.
pub fn section(name: &str, list_id: &str, layout: &str) -> Section {
    let editions: BTreeMap<String, String> = [("uk", list_id), ("international", list_id)]
        .into_iter()
        .map(|(e, id)| (e.to_string(), id.to_string()))
        .collect();

    Section {
        name: name.to_string(),
        editions,
        layout: layout.to_string(),
        is_concept: false,
        check_headshots: None,
        international_variants: Vec::new(),
    }
}

pub fn structure(sections: Vec<Section>, layouts: &[(&str, LayoutRule)]) -> PageStructure {
    PageStructure {
        sections,
        layouts: layouts
            .iter()
            .map(|(name, rule)| (name.to_string(), rule.clone()))
            .collect(),
    }
}
