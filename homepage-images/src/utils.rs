/// Helpers for reading content API payloads
pub mod content {
    use crate::types::{Annotation, ListItem};
    use uuid::Uuid;

    pub const VIDEO_TYPE: &str = "http://www.ft.com/ontology/content/Video";
    pub const HAS_AUTHOR: &str = "http://www.ft.com/ontology/annotation/hasAuthor";
    pub const OPINION_LABEL: &str = "Opinion";
    pub const GENRE_TYPE: &str = "GENRE";

    /// Pull the first UUID out of an identifier such as
    /// `http://api.ft.com/things/<uuid>`. Returned in lowercase hyphenated form.
    pub fn extract_uuid(id: &str) -> Option<String> {
        id.split(|c: char| !(c.is_ascii_hexdigit() || c == '-'))
            .filter(|token| token.len() == 36)
            .find_map(|token| Uuid::parse_str(token).ok())
            .map(|uuid| uuid.hyphenated().to_string())
    }

    /// Drop every item whose id equals the id of the item right before it.
    /// Duplicates that are not adjacent are kept.
    pub fn dedupe_adjacent(mut items: Vec<ListItem>) -> Vec<ListItem> {
        items.dedup_by(|current, previous| current.id == previous.id);
        items
    }

    pub fn is_video(types: &[String]) -> bool {
        types.iter().any(|t| t == VIDEO_TYPE)
    }

    /// An annotation marking the piece as opinion (the genre classification).
    pub fn is_opinion(annotation: &Annotation) -> bool {
        annotation.kind.as_deref() == Some(GENRE_TYPE)
            && annotation.pref_label.as_deref() == Some(OPINION_LABEL)
    }

    pub fn is_author(annotation: &Annotation) -> bool {
        annotation.predicate == HAS_AUTHOR
    }
}

/// Display URL utilities
pub mod url {
    use crate::types::{FetchConfig, ImageDescriptor};

    const HEADSHOT_SOURCE_TOKEN: &str = "?source=next";
    const HEADSHOT_SUFFIX: &str = "?source=janetbot&width=500";

    /// Route an image through the image service with the configured
    /// source and width.
    pub fn format_image_url(image: &ImageDescriptor, config: &FetchConfig) -> String {
        let encoded = urlencoding::encode(&image.binary_url);
        format!(
            "{}/{}?source={}&width={}",
            config.image_service_url, encoded, config.image_source, config.image_width
        )
    }

    pub fn format_headshot_url(image_url: &str) -> String {
        let mut formatted = image_url.replacen(HEADSHOT_SOURCE_TOKEN, "", 1);
        formatted.push_str(HEADSHOT_SUFFIX);
        formatted
    }

    pub fn article_url(web_url: Option<&str>) -> Option<String> {
        web_url.filter(|u| !u.is_empty()).map(str::to_string)
    }
}
