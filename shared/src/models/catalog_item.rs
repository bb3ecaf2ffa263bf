//! Catalog Item Model

use serde::{Deserialize, Serialize};

use super::localized::{Language, LocalizedText};

/// Weight unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "kg")]
    Kilogram,
}

/// Price currency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "MDL")]
    Mdl,
    #[default]
    #[serde(rename = "$")]
    Usd,
    #[serde(rename = "€")]
    Eur,
}

/// Catalog item entity
///
/// `category` is the denormalized category label, not a reference.
/// `image` is an opaque blob-store path, resolved to a URL on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// View counter maintained by the storefront
    #[serde(default)]
    pub views: u64,
}

fn default_true() -> bool {
    true
}

impl CatalogItem {
    pub fn display_name(&self, lang: Language) -> &str {
        self.name.get(lang)
    }
}

impl Default for CatalogItem {
    fn default() -> Self {
        Self {
            id: None,
            name: LocalizedText::default(),
            description: LocalizedText::default(),
            weight: 0.0,
            weight_unit: WeightUnit::default(),
            price: 0.0,
            currency: Currency::default(),
            category: String::new(),
            active: true,
            image: None,
            views: 0,
        }
    }
}

/// Partial edit payload, merged onto the stored record
///
/// Fields left `None` are absent from the serialized patch and therefore
/// preserved by the store's merge write.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<WeightUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ItemPatch {
    /// Merge this patch onto an item, mirroring the store's merge write.
    pub fn apply_to(&self, item: &mut CatalogItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(weight) = self.weight {
            item.weight = weight;
        }
        if let Some(weight_unit) = self.weight_unit {
            item.weight_unit = weight_unit;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(currency) = self.currency {
            item.currency = currency;
        }
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
        if let Some(active) = self.active {
            item.active = active;
        }
        if let Some(image) = &self.image {
            item.image = Some(image.clone());
        }
    }
}
