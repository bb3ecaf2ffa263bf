//! Usage statistics
//!
//! View recording and one-shot aggregation for the dashboard overview.
//! Pure read-and-aggregate; nothing here is cached.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use shared::models::{CatalogItem, CategoryList, CategoryView, PopularProduct, StatisticsOverview};

use crate::error::AdminResult;
use crate::store::{DocPath, DocumentStore, MENU_COLLECTION, VIEWS_COLLECTION};

/// Number of products shown in the popularity ranking
const POPULAR_LIMIT: usize = 6;
/// Views above which a product counts as converting
const CONVERSION_THRESHOLD: u64 = 10;

/// Dashboard statistics reader
pub struct StatisticsService {
    store: Arc<dyn DocumentStore>,
}

impl StatisticsService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Append a view record for a category.
    ///
    /// Fire-and-forget: a failure is logged and swallowed, recording
    /// never blocks the caller.
    pub async fn record_category_view(&self, category_id: &str) {
        let view = CategoryView {
            category_id: category_id.to_string(),
            created_at: Utc::now(),
        };
        let record = match serde_json::to_value(&view) {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(error = %error, "Failed to encode view record");
                return;
            }
        };
        if let Err(error) = self.store.add(VIEWS_COLLECTION, record).await {
            tracing::warn!(error = %error, "Failed to record category view");
        }
    }

    /// One-shot dashboard overview from the menu collection and the
    /// category aggregate.
    pub async fn overview(&self) -> AdminResult<StatisticsOverview> {
        let items: Vec<CatalogItem> = self
            .store
            .list(MENU_COLLECTION)
            .await?
            .into_iter()
            .filter_map(|doc| serde_json::from_value(doc.data).ok())
            .collect();

        let total_categories = match self.store.get(&DocPath::settings("categories")).await? {
            Some(doc) => serde_json::from_value::<CategoryList>(doc)?.list.len(),
            None => 0,
        };

        let total_products = items.len();
        let products_without_image = items.iter().filter(|item| item.image.is_none()).count();

        let mut ranked: Vec<&CatalogItem> = items.iter().collect();
        ranked.sort_by(|a, b| b.views.cmp(&a.views));
        let popular_products = ranked
            .iter()
            .take(POPULAR_LIMIT)
            .map(|item| PopularProduct {
                name: item.name.clone(),
                views: item.views,
            })
            .collect();

        let conversion_rate = if total_products > 0 {
            let converting = items
                .iter()
                .filter(|item| item.views > CONVERSION_THRESHOLD)
                .count();
            ((converting as f64 / total_products as f64) * 100.0).round() as u32
        } else {
            0
        };

        Ok(StatisticsOverview {
            total_products,
            products_without_image,
            total_categories,
            popular_products,
            conversion_rate,
        })
    }

    /// View counts per category within `[start, end)`.
    pub async fn views_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AdminResult<HashMap<String, u64>> {
        let mut counts = HashMap::new();
        for doc in self.store.list(VIEWS_COLLECTION).await? {
            let Ok(view) = serde_json::from_value::<CategoryView>(doc.data) else {
                continue;
            };
            if view.created_at >= start && view.created_at < end {
                *counts.entry(view.category_id).or_insert(0u64) += 1;
            }
        }
        Ok(counts)
    }
}
