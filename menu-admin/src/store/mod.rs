//! Store capability layer
//!
//! The remote backend — document database, blob storage — is consumed
//! exclusively through the traits in this module. The admin core never
//! sees a concrete SDK; [`memory`] provides in-process implementations
//! for tests and local runs.

pub mod memory;

// Re-exports
pub use memory::{MemoryBlobStore, MemoryIdentity, MemoryStore};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::watch;

/// Collection holding one document per catalog item
pub const MENU_COLLECTION: &str = "menu";
/// Collection of appended view records
pub const VIEWS_COLLECTION: &str = "views";
/// Collection of aggregate settings documents
pub const SETTINGS_COLLECTION: &str = "settings";

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Path of a single document: collection + document id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocPath {
    pub collection: String,
    pub id: String,
}

impl DocPath {
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Path of an aggregate settings document
    pub fn settings(id: impl Into<String>) -> Self {
        Self::new(SETTINGS_COLLECTION, id)
    }
}

impl std::fmt::Display for DocPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

/// Raw stored document: identity plus JSON fields
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

/// Remote document store capability
///
/// Identity allocation is client-side: an id can be obtained before any
/// write occurs, and ids are never reused.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Allocate a fresh document identity, usable before any write
    fn allocate_id(&self, collection: &str) -> String;

    /// One-shot read of a single document
    async fn get(&self, path: &DocPath) -> StoreResult<Option<Value>>;

    /// One-shot read of a whole collection, in insertion order
    async fn list(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Upsert a document.
    ///
    /// With `merge`, top-level patch fields overwrite the stored fields
    /// (an explicit JSON `null` clears a field) and absent fields are
    /// left untouched; without it the document is replaced in full.
    async fn set(&self, path: &DocPath, patch: Value, merge: bool) -> StoreResult<()>;

    /// Delete a document; deleting an absent document is not an error
    async fn delete(&self, path: &DocPath) -> StoreResult<()>;

    /// Append a document with a generated identity
    async fn add(&self, collection: &str, value: Value) -> StoreResult<String>;

    /// Push-based stream of full-collection snapshots.
    ///
    /// The receiver always holds the latest snapshot; every remote
    /// change publishes a new one.
    fn watch(&self, collection: &str) -> watch::Receiver<Vec<Document>>;
}

/// Blob storage capability
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> StoreResult<()>;

    /// Resolve a blob path to a fetchable URL; resolved lazily per use,
    /// never persisted by the caller
    async fn download_url(&self, path: &str) -> StoreResult<String>;

    /// Delete a blob; callers treat failure as non-fatal
    async fn delete(&self, path: &str) -> StoreResult<()>;
}

/// Shallow field merge: every top-level patch key overwrites the target,
/// including explicit nulls. Non-object targets are replaced.
pub(crate) fn merge_fields(target: &mut Value, patch: Value) {
    match (target.as_object_mut(), patch) {
        (Some(fields), Value::Object(patch_fields)) => {
            for (key, value) in patch_fields {
                fields.insert(key, value);
            }
        }
        (_, patch) => *target = patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_overwrites_and_preserves() {
        let mut target = json!({ "a": 1, "b": "keep" });
        merge_fields(&mut target, json!({ "a": 2, "c": true }));
        assert_eq!(target, json!({ "a": 2, "b": "keep", "c": true }));
    }

    #[test]
    fn test_merge_null_clears_field() {
        let mut target = json!({ "image": "images/abc" });
        merge_fields(&mut target, json!({ "image": null }));
        assert_eq!(target, json!({ "image": null }));
    }

    #[test]
    fn test_doc_path_display() {
        assert_eq!(DocPath::settings("random").to_string(), "settings/random");
    }
}
