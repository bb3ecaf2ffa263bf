//! Usage Statistics Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::localized::LocalizedText;

/// One recorded category view, appended to the `views` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub category_id: String,
    pub created_at: DateTime<Utc>,
}

/// Product ranked by storefront views
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopularProduct {
    pub name: LocalizedText,
    pub views: u64,
}

/// One-shot dashboard overview
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsOverview {
    pub total_products: usize,
    pub products_without_image: usize,
    pub total_categories: usize,
    #[serde(default)]
    pub popular_products: Vec<PopularProduct>,
    /// Share of products with more than 10 views, rounded percent
    pub conversion_rate: u32,
}
