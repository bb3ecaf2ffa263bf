//! Category Model

use serde::{Deserialize, Serialize};

use super::localized::Language;

/// Category entry inside the `settings/categories` aggregate
///
/// Labels are flat per-language strings; `ru` is mandatory, the editor
/// additionally requires `ro` and `en` before a save is accepted. The
/// store itself does not enforce any of this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    /// Navigation slot this category belongs to ("1".."3")
    #[serde(default)]
    pub parent_id: String,
    #[serde(default)]
    pub ru: String,
    #[serde(default)]
    pub ro: String,
    #[serde(default)]
    pub en: String,
    /// Blob-store path of the category icon, empty when unset
    #[serde(default)]
    pub icon: String,
}

impl Category {
    /// Label in the requested language, falling back to `ru`.
    pub fn label(&self, lang: Language) -> &str {
        let translation = match lang {
            Language::Ru => &self.ru,
            Language::Ro => &self.ro,
            Language::En => &self.en,
        };
        if translation.is_empty() {
            &self.ru
        } else {
            translation
        }
    }
}

/// Whole-list aggregate document, rewritten in full on every edit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryList {
    #[serde(default)]
    pub list: Vec<Category>,
}
