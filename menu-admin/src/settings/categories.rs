//! Category editor
//!
//! Per-entry edit cycle over the `settings/categories` aggregate:
//! viewing → editing → validating → saved|viewing. A save is accepted
//! only with non-empty `ru`/`ro`/`en` labels and rewrites the whole
//! list document.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use shared::models::{Category, CategoryList};
use uuid::Uuid;

use crate::error::{AdminError, AdminResult};
use crate::store::{BlobStore, DocPath, DocumentStore};
use crate::utils::validation::{FieldErrors, validate_labels};

/// Blob path prefix for category icons
const ICON_PREFIX: &str = "categories";

/// Read-modify-write editor for the category list
pub struct CategoryEditor {
    store: Arc<dyn DocumentStore>,
    blobs: Arc<dyn BlobStore>,
    /// Entries currently in the editing state
    editing: HashSet<String>,
    /// Validation errors per entry, keyed by language code
    errors: HashMap<String, FieldErrors>,
}

impl CategoryEditor {
    pub fn new(store: Arc<dyn DocumentStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            blobs,
            editing: HashSet::new(),
            errors: HashMap::new(),
        }
    }

    fn doc() -> DocPath {
        DocPath::settings("categories")
    }

    fn icon_path(id: &str) -> String {
        format!("{ICON_PREFIX}/{id}")
    }

    /// Read the current list; an absent document is an empty list.
    pub async fn load(&self) -> AdminResult<Vec<Category>> {
        match self.store.get(&Self::doc()).await? {
            Some(doc) => Ok(serde_json::from_value::<CategoryList>(doc)?.list),
            None => Ok(Vec::new()),
        }
    }

    // =========================================================================
    // Edit state
    // =========================================================================

    pub fn begin_edit(&mut self, category: &Category) {
        self.editing.insert(category.id.clone());
        self.errors.insert(
            category.id.clone(),
            validate_labels(&category.ru, &category.ro, &category.en),
        );
    }

    pub fn cancel_edit(&mut self, id: &str) {
        self.editing.remove(id);
        self.errors.remove(id);
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.contains(id)
    }

    /// Inline error text for an entry, keyed by language code
    pub fn field_errors(&self, id: &str) -> Option<&FieldErrors> {
        self.errors.get(id)
    }

    /// Re-validate an entry as its fields change, for live inline errors.
    pub fn touch(&mut self, category: &Category) {
        self.errors.insert(
            category.id.clone(),
            validate_labels(&category.ru, &category.ro, &category.en),
        );
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Start a new draft entry under a navigation slot.
    ///
    /// The draft exists only in the editor until its first valid save;
    /// nothing is written for an entry that never validates.
    pub fn add(&mut self, parent_id: &str) -> Category {
        let category = Category {
            id: Uuid::new_v4().to_string(),
            parent_id: parent_id.to_string(),
            ..Default::default()
        };
        self.begin_edit(&category);
        category
    }

    /// Validate and persist one entry, rewriting the whole list.
    ///
    /// A new entry is appended after the existing ones; an existing
    /// entry is replaced in place. An icon payload is uploaded to
    /// `categories/<id>` and stored as a resolved URL.
    pub async fn save(
        &mut self,
        category: &Category,
        icon: Option<Vec<u8>>,
    ) -> AdminResult<Category> {
        let errors = validate_labels(&category.ru, &category.ro, &category.en);
        if !errors.is_empty() {
            self.errors.insert(category.id.clone(), errors.clone());
            return Err(AdminError::Validation(errors));
        }

        let mut updated = category.clone();
        if let Some(bytes) = icon {
            let icon_path = Self::icon_path(&category.id);
            self.blobs.upload(&icon_path, bytes).await?;
            updated.icon = self.blobs.download_url(&icon_path).await?;
        }

        let mut list = self.load().await?;
        match list.iter().position(|entry| entry.id == updated.id) {
            Some(index) => list[index] = updated.clone(),
            None => list.push(updated.clone()),
        }
        self.write_list(list).await?;

        self.cancel_edit(&category.id);
        Ok(updated)
    }

    /// Remove an entry and rewrite the list.
    pub async fn delete(&mut self, id: &str) -> AdminResult<()> {
        let mut list = self.load().await?;
        list.retain(|entry| entry.id != id);
        self.write_list(list).await?;
        self.cancel_edit(id);
        Ok(())
    }

    /// Delete an entry's icon blob and clear the reference in the list.
    pub async fn delete_icon(&mut self, id: &str) -> AdminResult<()> {
        self.blobs.delete(&Self::icon_path(id)).await?;

        let mut list = self.load().await?;
        if let Some(entry) = list.iter_mut().find(|entry| entry.id == id) {
            entry.icon.clear();
        }
        self.write_list(list).await
    }

    /// Whole-list rewrite; the last full write wins across sessions.
    async fn write_list(&self, list: Vec<Category>) -> AdminResult<()> {
        let doc = serde_json::to_value(CategoryList { list })?;
        self.store.set(&Self::doc(), doc, true).await?;
        Ok(())
    }
}
