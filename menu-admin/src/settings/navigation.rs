//! Navigation label editor
//!
//! Same read-modify-write cycle as the category editor, over the three
//! fixed navigation slots in `settings/navigation`.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use shared::models::{NavigationDoc, NavigationItem};

use crate::error::{AdminError, AdminResult};
use crate::store::{BlobStore, DocPath, DocumentStore};
use crate::utils::validation::{FieldErrors, validate_labels};

/// Blob path prefix for navigation icons
const ICON_PREFIX: &str = "navigation";

/// Read-modify-write editor for the navigation labels
pub struct NavigationEditor {
    store: Arc<dyn DocumentStore>,
    blobs: Arc<dyn BlobStore>,
    editing: HashSet<String>,
    errors: HashMap<String, FieldErrors>,
}

impl NavigationEditor {
    pub fn new(store: Arc<dyn DocumentStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            blobs,
            editing: HashSet::new(),
            errors: HashMap::new(),
        }
    }

    fn doc() -> DocPath {
        DocPath::settings("navigation")
    }

    fn icon_path(id: &str) -> String {
        format!("{ICON_PREFIX}/{id}")
    }

    /// Read the slots; an absent document yields the empty fixed slots.
    pub async fn load(&self) -> AdminResult<Vec<NavigationItem>> {
        match self.store.get(&Self::doc()).await? {
            Some(doc) => Ok(serde_json::from_value::<NavigationDoc>(doc)?.list),
            None => Ok(NavigationDoc::default_slots()),
        }
    }

    pub fn begin_edit(&mut self, item: &NavigationItem) {
        self.editing.insert(item.id.clone());
        self.errors.insert(
            item.id.clone(),
            validate_labels(&item.ru, &item.ro, &item.en),
        );
    }

    pub fn cancel_edit(&mut self, id: &str) {
        self.editing.remove(id);
        self.errors.remove(id);
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.contains(id)
    }

    pub fn field_errors(&self, id: &str) -> Option<&FieldErrors> {
        self.errors.get(id)
    }

    /// Re-validate an entry as its fields change.
    pub fn touch(&mut self, item: &NavigationItem) {
        self.errors.insert(
            item.id.clone(),
            validate_labels(&item.ru, &item.ro, &item.en),
        );
    }

    /// Validate and persist one slot, rewriting the whole list.
    pub async fn save(
        &mut self,
        item: &NavigationItem,
        icon: Option<Vec<u8>>,
    ) -> AdminResult<NavigationItem> {
        let errors = validate_labels(&item.ru, &item.ro, &item.en);
        if !errors.is_empty() {
            self.errors.insert(item.id.clone(), errors.clone());
            return Err(AdminError::Validation(errors));
        }

        let mut updated = item.clone();
        if let Some(bytes) = icon {
            let icon_path = Self::icon_path(&item.id);
            self.blobs.upload(&icon_path, bytes).await?;
            updated.icon = self.blobs.download_url(&icon_path).await?;
        }

        let mut list = self.load().await?;
        match list.iter().position(|slot| slot.id == updated.id) {
            Some(index) => list[index] = updated.clone(),
            None => list.push(updated.clone()),
        }
        self.write_list(list).await?;

        self.cancel_edit(&item.id);
        Ok(updated)
    }

    /// Delete a slot's icon blob and clear the reference.
    pub async fn delete_icon(&mut self, id: &str) -> AdminResult<()> {
        self.blobs.delete(&Self::icon_path(id)).await?;

        let mut list = self.load().await?;
        if let Some(slot) = list.iter_mut().find(|slot| slot.id == id) {
            slot.icon.clear();
        }
        self.write_list(list).await
    }

    async fn write_list(&self, list: Vec<NavigationItem>) -> AdminResult<()> {
        let doc = serde_json::to_value(NavigationDoc { list })?;
        self.store.set(&Self::doc(), doc, true).await?;
        Ok(())
    }
}
