//! Catalog subscription service
//!
//! Keeps a local copy of the menu collection current via the store's
//! standing subscription. The cache is the single source the derived
//! view reads from; remote-origin changes land here without explicit
//! refresh.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::CatalogItem;

use crate::store::{Document, DocumentStore, MENU_COLLECTION};

/// Locally cached catalog, fed by the standing subscription
#[derive(Clone)]
pub struct CatalogService {
    items: Arc<RwLock<Vec<CatalogItem>>>,
}

impl CatalogService {
    /// Start the subscription task and return the shared cache.
    ///
    /// A failed or empty initial snapshot leaves the cache empty; every
    /// later push replaces it wholesale.
    pub fn start(store: Arc<dyn DocumentStore>) -> Self {
        let items = Arc::new(RwLock::new(Vec::new()));
        let cache = Arc::clone(&items);
        let mut subscription = store.watch(MENU_COLLECTION);

        tokio::spawn(async move {
            loop {
                let snapshot = subscription.borrow_and_update().clone();
                Self::apply(&cache, snapshot);
                if subscription.changed().await.is_err() {
                    tracing::warn!("Menu subscription closed");
                    break;
                }
            }
        });

        Self { items }
    }

    fn apply(cache: &Arc<RwLock<Vec<CatalogItem>>>, snapshot: Vec<Document>) {
        let mut parsed = Vec::with_capacity(snapshot.len());
        for doc in snapshot {
            match serde_json::from_value::<CatalogItem>(doc.data) {
                Ok(mut item) => {
                    // The stored id field may lag behind the document id
                    item.id = Some(doc.id);
                    parsed.push(item);
                }
                Err(error) => {
                    tracing::warn!(id = %doc.id, error = %error, "Skipping unreadable menu record");
                }
            }
        }
        *cache.write() = parsed;
    }

    /// Clone of the current cache contents
    pub fn snapshot(&self) -> Vec<CatalogItem> {
        self.items.read().clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("items_count", &self.items.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DocPath, MemoryStore};
    use serde_json::json;

    #[tokio::test]
    async fn test_subscription_keeps_cache_current() {
        let store = Arc::new(MemoryStore::new());
        let service = CatalogService::start(store.clone());

        store
            .set(
                &DocPath::new(MENU_COLLECTION, "m1"),
                json!({ "name": "Борщ", "price": 45, "category": "Супы" }),
                true,
            )
            .await
            .unwrap();

        // Let the subscription task observe the push
        tokio::task::yield_now().await;
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        let items = service.snapshot();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id.as_deref(), Some("m1"));
        assert_eq!(items[0].category, "Супы");
        assert!(items[0].active);
    }

    #[tokio::test]
    async fn test_unreadable_record_is_skipped() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(&DocPath::new(MENU_COLLECTION, "bad"), json!(42), true)
            .await
            .unwrap();
        store
            .set(
                &DocPath::new(MENU_COLLECTION, "good"),
                json!({ "name": "Чай" }),
                true,
            )
            .await
            .unwrap();

        let service = CatalogService::start(store);
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        let items = service.snapshot();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id.as_deref(), Some("good"));
    }
}
