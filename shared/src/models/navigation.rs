//! Navigation Model

use serde::{Deserialize, Serialize};

use super::localized::Language;

/// The fixed navigation slots of the storefront
pub const NAV_SLOTS: [&str; 3] = ["1", "2", "3"];

/// Navigation label entry
///
/// Identities come from the fixed slot set, not the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: String,
    #[serde(default)]
    pub ru: String,
    #[serde(default)]
    pub ro: String,
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub icon: String,
}

impl NavigationItem {
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

/// Whole-list aggregate document for the navigation labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationDoc {
    #[serde(default = "NavigationDoc::default_slots")]
    pub list: Vec<NavigationItem>,
}

impl NavigationDoc {
    /// Empty entries for each fixed slot
    pub fn default_slots() -> Vec<NavigationItem> {
        NAV_SLOTS
            .iter()
            .map(|id| NavigationItem {
                id: (*id).to_string(),
                ..Default::default()
            })
            .collect()
    }
}

impl Default for NavigationDoc {
    fn default() -> Self {
        Self {
            list: Self::default_slots(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slots() {
        let doc = NavigationDoc::default();
        assert_eq!(doc.list.len(), 3);
        assert_eq!(doc.list[0].id, "1");
        assert_eq!(doc.list[2].id, "3");
    }
}
