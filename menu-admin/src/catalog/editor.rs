//! Item edit reconciliation
//!
//! Turns a partial edit into exactly one merge upsert against the menu
//! collection, with the image upload folded into the same logical
//! update. Concurrent edits from another session are not reconciled;
//! the last write wins.

use std::sync::Arc;

use serde_json::json;
use shared::models::{CatalogItem, ItemPatch};

use crate::error::{AdminError, AdminResult};
use crate::store::{BlobStore, DocPath, DocumentStore, MENU_COLLECTION};

/// Blob path prefix for item images
const IMAGE_PREFIX: &str = "images";

/// Reconciles catalog item edits against the remote store
#[derive(Clone)]
pub struct ItemEditor {
    store: Arc<dyn DocumentStore>,
    blobs: Arc<dyn BlobStore>,
}

impl ItemEditor {
    pub fn new(store: Arc<dyn DocumentStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { store, blobs }
    }

    fn image_path(id: &str) -> String {
        format!("{IMAGE_PREFIX}/{id}")
    }

    /// Save a new or existing item.
    ///
    /// Without an existing item a fresh identity is allocated before the
    /// write. The patch is merged onto the stored record: absent fields
    /// stay untouched. A supplied image is uploaded to `images/<id>` and
    /// its path set as part of the same update. Returns the resulting
    /// item for the presentation layer to apply without a re-fetch.
    pub async fn save(
        &self,
        existing: Option<&CatalogItem>,
        mut patch: ItemPatch,
        image: Option<Vec<u8>>,
    ) -> AdminResult<CatalogItem> {
        let id = match existing.and_then(|item| item.id.clone()) {
            Some(id) => id,
            None => self.store.allocate_id(MENU_COLLECTION),
        };

        if let Some(bytes) = image {
            let image_path = Self::image_path(&id);
            self.blobs.upload(&image_path, bytes).await?;
            patch.image = Some(image_path);
        }

        let mut fields = serde_json::to_value(&patch)?;
        if let Some(object) = fields.as_object_mut() {
            object.insert("id".to_string(), json!(id));
        }
        self.store
            .set(&DocPath::new(MENU_COLLECTION, &id), fields, true)
            .await?;

        let mut saved = existing.cloned().unwrap_or_default();
        saved.id = Some(id);
        patch.apply_to(&mut saved);
        Ok(saved)
    }

    /// Delete an item and, best effort, its image blob.
    ///
    /// A failed blob delete is logged and does not block the record
    /// deletion.
    pub async fn delete(&self, item: &CatalogItem) -> AdminResult<()> {
        let id = item
            .id
            .as_deref()
            .ok_or_else(|| AdminError::Invalid("item has no identity".to_string()))?;

        if let Some(image) = &item.image
            && let Err(error) = self.blobs.delete(image).await
        {
            tracing::warn!(path = %image, error = %error, "Failed to delete item image");
        }

        self.store.delete(&DocPath::new(MENU_COLLECTION, id)).await?;
        Ok(())
    }

    /// Delete only the image: remove the blob and clear the reference
    /// field, keeping the item.
    pub async fn delete_image(&self, item: &CatalogItem) -> AdminResult<CatalogItem> {
        let id = item
            .id
            .as_deref()
            .ok_or_else(|| AdminError::Invalid("item has no identity".to_string()))?;
        let Some(image) = &item.image else {
            return Ok(item.clone());
        };

        self.blobs.delete(image).await?;
        self.store
            .set(
                &DocPath::new(MENU_COLLECTION, id),
                json!({ "image": null }),
                true,
            )
            .await?;

        let mut updated = item.clone();
        updated.image = None;
        Ok(updated)
    }

    /// Best-effort bulk delete.
    ///
    /// One delete per identifier; a failure is logged and the batch
    /// carries on. Returns the number of records actually removed. The
    /// standing subscription refreshes the cache afterwards.
    pub async fn delete_many<I>(&self, ids: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut deleted = 0;
        for id in ids {
            let path = DocPath::new(MENU_COLLECTION, &id);

            // Look up the image reference so the blob goes too
            match self.store.get(&path).await {
                Ok(Some(data)) => {
                    if let Some(image) = data.get("image").and_then(|v| v.as_str())
                        && let Err(error) = self.blobs.delete(image).await
                    {
                        tracing::warn!(path = %image, error = %error, "Failed to delete item image");
                    }
                }
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(id = %id, error = %error, "Failed to read item before bulk delete");
                }
            }

            match self.store.delete(&path).await {
                Ok(()) => deleted += 1,
                Err(error) => {
                    tracing::warn!(id = %id, error = %error, "Bulk delete failed for item");
                }
            }
        }
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryBlobStore, MemoryStore};
    use shared::models::LocalizedText;

    fn editor() -> (ItemEditor, Arc<MemoryStore>, Arc<MemoryBlobStore>) {
        let store = Arc::new(MemoryStore::new());
        let blobs = Arc::new(MemoryBlobStore::new());
        (
            ItemEditor::new(store.clone(), blobs.clone()),
            store,
            blobs,
        )
    }

    fn patch(name: &str, price: f64) -> ItemPatch {
        ItemPatch {
            name: Some(LocalizedText::new(name)),
            price: Some(price),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_allocates_identity_and_defaults() {
        let (editor, store, _) = editor();

        let saved = editor.save(None, patch("Борщ", 45.0), None).await.unwrap();
        let id = saved.id.clone().unwrap();
        assert!(saved.active);

        let stored = store
            .get(&DocPath::new(MENU_COLLECTION, &id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored["price"], 45.0);
        assert_eq!(stored["id"], id.as_str());
        // active was absent from the patch; reads fall back to the default
        let roundtrip: CatalogItem = serde_json::from_value(stored).unwrap();
        assert!(roundtrip.active);
    }

    #[tokio::test]
    async fn test_merge_preserves_unpatched_fields() {
        let (editor, store, _) = editor();

        let created = editor.save(None, patch("Борщ", 45.0), None).await.unwrap();
        let update = ItemPatch {
            price: Some(60.0),
            ..Default::default()
        };
        let updated = editor.save(Some(&created), update, None).await.unwrap();
        assert_eq!(updated.price, 60.0);
        assert_eq!(updated.name.ru, "Борщ");

        let stored = store
            .get(&DocPath::new(MENU_COLLECTION, created.id.as_deref().unwrap()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored["name"]["ru"], "Борщ");
        assert_eq!(stored["price"], 60.0);
    }

    #[tokio::test]
    async fn test_save_is_idempotent() {
        let (editor, store, _) = editor();

        let created = editor.save(None, patch("Борщ", 45.0), None).await.unwrap();
        let again = editor
            .save(Some(&created), patch("Борщ", 45.0), None)
            .await
            .unwrap();
        assert_eq!(created.id, again.id);

        let path = DocPath::new(MENU_COLLECTION, created.id.as_deref().unwrap());
        let stored = store.get(&path).await.unwrap().unwrap();
        let items = store.list(MENU_COLLECTION).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(stored["price"], 45.0);
    }

    #[tokio::test]
    async fn test_image_uploaded_to_identity_path() {
        let (editor, store, blobs) = editor();

        let saved = editor
            .save(None, patch("Борщ", 45.0), Some(vec![0xFF, 0xD8]))
            .await
            .unwrap();
        let id = saved.id.clone().unwrap();
        let image_path = format!("images/{id}");
        assert_eq!(saved.image.as_deref(), Some(image_path.as_str()));
        assert!(blobs.contains(&image_path));

        let stored = store
            .get(&DocPath::new(MENU_COLLECTION, &id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored["image"], image_path.as_str());
    }

    #[tokio::test]
    async fn test_delete_image_clears_field_and_blob() {
        let (editor, store, blobs) = editor();

        let saved = editor
            .save(None, patch("Борщ", 45.0), Some(vec![1]))
            .await
            .unwrap();
        let image_path = saved.image.clone().unwrap();

        let updated = editor.delete_image(&saved).await.unwrap();
        assert_eq!(updated.image, None);
        assert!(!blobs.contains(&image_path));
        assert!(blobs.download_url(&image_path).await.is_err());

        let stored = store
            .get(&DocPath::new(MENU_COLLECTION, saved.id.as_deref().unwrap()))
            .await
            .unwrap()
            .unwrap();
        assert!(stored["image"].is_null());
        let roundtrip: CatalogItem = serde_json::from_value(stored).unwrap();
        assert_eq!(roundtrip.image, None);
    }

    #[tokio::test]
    async fn test_delete_removes_record_despite_missing_blob() {
        let (editor, store, _) = editor();

        let mut saved = editor.save(None, patch("Борщ", 45.0), None).await.unwrap();
        // Reference a blob that was never uploaded
        saved.image = Some("images/ghost".to_string());

        editor.delete(&saved).await.unwrap();
        let stored = store
            .get(&DocPath::new(MENU_COLLECTION, saved.id.as_deref().unwrap()))
            .await
            .unwrap();
        assert!(stored.is_none());
    }

    #[tokio::test]
    async fn test_bulk_delete_removes_exactly_selected() {
        let (editor, store, _) = editor();

        let a = editor.save(None, patch("a", 1.0), None).await.unwrap();
        let b = editor.save(None, patch("b", 2.0), None).await.unwrap();
        let c = editor.save(None, patch("c", 3.0), None).await.unwrap();

        let deleted = editor
            .delete_many(vec![a.id.clone().unwrap(), c.id.clone().unwrap()])
            .await;
        assert_eq!(deleted, 2);

        let remaining = store.list(MENU_COLLECTION).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b.id.unwrap());
    }
}
