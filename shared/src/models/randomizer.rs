//! Randomizer Settings Model

use serde::{Deserialize, Serialize};

use super::localized::LocalizedText;

fn default_true() -> bool {
    true
}

fn default_navigation() -> String {
    "1".to_string()
}

/// One promotional randomizer slot
///
/// Draws random items from the referenced categories, scoped to a
/// navigation slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomizerConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Heading shown on the storefront slot; legacy records store a
    /// bare string
    #[serde(default)]
    pub slot_title: LocalizedText,
    #[serde(default = "default_navigation")]
    pub navigation: String,
    #[serde(default)]
    pub category_ids: Vec<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Aggregate document at `settings/random`, rewritten in full on edit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_description: Option<String>,
    #[serde(default)]
    pub randomizers: Vec<RandomizerConfig>,
}

impl RandomSettings {
    /// Normalize a stored document, migrating the legacy shape.
    ///
    /// Early documents held a single top-level `categoryIds`/`navigation`
    /// pair instead of a `randomizers` array; those become one "default"
    /// randomizer.
    pub fn from_document(value: serde_json::Value) -> Self {
        if value.get("randomizers").is_none() && value.get("categoryIds").is_some() {
            let category_ids = value
                .get("categoryIds")
                .cloned()
                .and_then(|ids| serde_json::from_value(ids).ok())
                .unwrap_or_default();
            let navigation = value
                .get("navigation")
                .and_then(|nav| nav.as_str())
                .unwrap_or("1")
                .to_string();
            return Self {
                page_title: None,
                page_description: None,
                randomizers: vec![RandomizerConfig {
                    id: "default".to_string(),
                    name: "Default Randomizer".to_string(),
                    slot_title: LocalizedText::new("Randomizer"),
                    navigation,
                    category_ids,
                    active: true,
                }],
            };
        }
        serde_json::from_value(value).unwrap_or_default()
    }
}
