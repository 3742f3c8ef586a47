use crate::types::{HomepageError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// Marker used in place of a list id when a section is not shown in an edition.
pub const HIDDEN: &str = "hidden";

pub const LANDSCAPE_LAYOUT: &str = "landscape";

/// Layouts whose lists are known to contain adjacent duplicates.
pub const DEDUPED_LAYOUTS: [&str; 2] = ["regionalnews", "technology"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternationalVariant {
    pub region: String,
    #[serde(rename = "listId")]
    pub list_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub name: String,
    /// Edition key to list (or concept) id, or [`HIDDEN`].
    pub editions: BTreeMap<String, String>,
    pub layout: String,
    #[serde(default)]
    pub is_concept: bool,
    #[serde(default)]
    pub check_headshots: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub international_variants: Vec<InternationalVariant>,
}

/// How a section appears in one edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSource<'a> {
    List(&'a str),
    Hidden,
    Absent,
}

impl Section {
    pub fn source_for(&self, edition: &str) -> SectionSource<'_> {
        match self.editions.get(edition).map(String::as_str) {
            Some(HIDDEN) => SectionSource::Hidden,
            Some(list_id) => SectionSource::List(list_id),
            None => SectionSource::Absent,
        }
    }
}

/// Positions of a layout that carry an image, and those rendered above the fold.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRule {
    pub positions: Vec<usize>,
    #[serde(default)]
    pub top_half: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageStructure {
    pub sections: Vec<Section>,
    pub layouts: BTreeMap<String, LayoutRule>,
}

impl PageStructure {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let structure: Self = serde_json::from_str(json)?;
        structure.validate()?;
        Ok(structure)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let structure = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            sections = structure.sections.len(),
            layouts = structure.layouts.len(),
            "Loaded page structure"
        );
        Ok(structure)
    }

    /// Every section layout must have a rule. Layout hints returned by the
    /// API at runtime are not checked here.
    pub fn validate(&self) -> Result<()> {
        for section in &self.sections {
            if !self.layouts.contains_key(&section.layout) {
                return Err(HomepageError::UnknownLayout {
                    section: section.name.clone(),
                    layout: section.layout.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn positions(&self, layout: &str) -> &[usize] {
        match self.layouts.get(layout) {
            Some(rule) => &rule.positions,
            None => {
                warn!(layout, "No position rule for layout");
                &[]
            }
        }
    }

    pub fn is_top_half(&self, layout: &str, position: usize) -> bool {
        self.layouts
            .get(layout)
            .map(|rule| rule.top_half.contains(&position))
            .unwrap_or(false)
    }
}

impl Default for PageStructure {
    fn default() -> Self {
        fn layout(positions: &[usize], top_half: &[usize]) -> LayoutRule {
            LayoutRule {
                positions: positions.to_vec(),
                top_half: top_half.to_vec(),
            }
        }

        fn section(
            name: &str,
            editions: &[(&str, &str)],
            layout: &str,
            is_concept: bool,
            check_headshots: Option<usize>,
        ) -> Section {
            Section {
                name: name.to_string(),
                editions: editions
                    .iter()
                    .map(|(edition, id)| (edition.to_string(), id.to_string()))
                    .collect(),
                layout: layout.to_string(),
                is_concept,
                check_headshots,
                international_variants: Vec::new(),
            }
        }

        let layouts = [
            ("landscape", layout(&[0, 3], &[0, 1, 2, 3])),
            ("standaloneimage", layout(&[0], &[0, 1, 2])),
            ("bigstory", layout(&[0, 4], &[0, 1, 2, 3, 4])),
            ("opinion", layout(&[0, 1], &[])),
            ("editorspicks", layout(&[0, 1, 2, 3, 4, 5], &[])),
            ("regionalnews", layout(&[0, 3], &[])),
            ("technology", layout(&[0], &[])),
            ("video", layout(&[0, 1, 2, 3], &[])),
            ("lifeandarts", layout(&[0, 1, 2, 3, 4, 5], &[])),
        ]
        .into_iter()
        .map(|(name, rule)| (name.to_string(), rule))
        .collect();

        let mut regional = section(
            "regional-news",
            &[("uk", "2d9c4d6c-3a1f-11e7-821a-6027b8a20f23"), ("international", HIDDEN)],
            "regionalnews",
            false,
            None,
        );
        regional.international_variants = vec![
            InternationalVariant {
                region: "americas".to_string(),
                list_id: "5c1c2c8e-3a1f-11e7-821a-6027b8a20f23".to_string(),
            },
            InternationalVariant {
                region: "asia".to_string(),
                list_id: "6a0b1f6a-3a1f-11e7-821a-6027b8a20f23".to_string(),
            },
            InternationalVariant {
                region: "europe".to_string(),
                list_id: "73c2d7b4-3a1f-11e7-821a-6027b8a20f23".to_string(),
            },
        ];

        let sections = vec![
            section(
                "top-stories",
                &[
                    ("uk", "520ddb76-e43d-11e4-9e89-00144feab7de"),
                    ("international", "b0d8e4fe-10ff-11e5-8413-00144feabdc0"),
                ],
                "landscape",
                false,
                None,
            ),
            section(
                "opinion",
                &[
                    ("uk", "bc81b5bc-1995-11e5-a130-2e7db721f996"),
                    ("international", "bc81b5bc-1995-11e5-a130-2e7db721f996"),
                ],
                "opinion",
                false,
                Some(5),
            ),
            section(
                "editors-picks",
                &[
                    ("uk", "73667f46-1a55-11e5-a130-2e7db721f996"),
                    ("international", "73667f46-1a55-11e5-a130-2e7db721f996"),
                ],
                "editorspicks",
                false,
                Some(6),
            ),
            regional,
            section(
                "technology",
                &[
                    ("uk", "b2d2b1c6-0c55-4c5a-9a59-4f3e3aa6cdd4"),
                    ("international", "b2d2b1c6-0c55-4c5a-9a59-4f3e3aa6cdd4"),
                ],
                "technology",
                true,
                None,
            ),
            section(
                "video",
                &[
                    ("uk", "40a1ac7b-c3e4-4ea4-8e1a-4a1d5b1f0b7c"),
                    ("international", "40a1ac7b-c3e4-4ea4-8e1a-4a1d5b1f0b7c"),
                ],
                "video",
                false,
                None,
            ),
            section(
                "life-and-arts",
                &[
                    ("uk", "7f9b0e36-1a55-11e5-a130-2e7db721f996"),
                    ("international", "7f9b0e36-1a55-11e5-a130-2e7db721f996"),
                ],
                "lifeandarts",
                false,
                Some(3),
            ),
        ];

        Self { sections, layouts }
    }
}
