//! In-process store implementations
//!
//! DashMap-backed document and blob stores with watch-channel snapshot
//! publishing. Used by tests and local runs; a deployment binds real
//! backend SDKs to the same traits.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::watch;
use uuid::Uuid;

use super::{
    BlobStore, DocPath, Document, DocumentStore, StoreError, StoreResult, merge_fields,
};
use crate::auth::{AuthUser, IdentityProvider};

/// In-memory document store
///
/// Collections preserve insertion order; every mutation publishes a
/// fresh full-collection snapshot to watchers.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<DashMap<String, Vec<Document>>>,
    publishers: Arc<DashMap<String, watch::Sender<Vec<Document>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot(&self, collection: &str) -> Vec<Document> {
        self.collections
            .get(collection)
            .map(|docs| docs.clone())
            .unwrap_or_default()
    }

    fn publish(&self, collection: &str) {
        let snapshot = self.snapshot(collection);
        if let Some(publisher) = self.publishers.get(collection) {
            publisher.send_replace(snapshot);
        }
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("collections", &self.collections.len())
            .finish()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn allocate_id(&self, _collection: &str) -> String {
        Uuid::new_v4().to_string()
    }

    async fn get(&self, path: &DocPath) -> StoreResult<Option<Value>> {
        Ok(self.collections.get(&path.collection).and_then(|docs| {
            docs.iter()
                .find(|doc| doc.id == path.id)
                .map(|doc| doc.data.clone())
        }))
    }

    async fn list(&self, collection: &str) -> StoreResult<Vec<Document>> {
        Ok(self.snapshot(collection))
    }

    async fn set(&self, path: &DocPath, patch: Value, merge: bool) -> StoreResult<()> {
        {
            let mut docs = self.collections.entry(path.collection.clone()).or_default();
            match docs.iter().position(|doc| doc.id == path.id) {
                Some(index) if merge => merge_fields(&mut docs[index].data, patch),
                Some(index) => docs[index].data = patch,
                None => docs.push(Document {
                    id: path.id.clone(),
                    data: patch,
                }),
            }
        }
        self.publish(&path.collection);
        Ok(())
    }

    async fn delete(&self, path: &DocPath) -> StoreResult<()> {
        if let Some(mut docs) = self.collections.get_mut(&path.collection) {
            docs.retain(|doc| doc.id != path.id);
        }
        self.publish(&path.collection);
        Ok(())
    }

    async fn add(&self, collection: &str, value: Value) -> StoreResult<String> {
        let id = self.allocate_id(collection);
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.clone(),
                data: value,
            });
        self.publish(collection);
        Ok(id)
    }

    fn watch(&self, collection: &str) -> watch::Receiver<Vec<Document>> {
        let snapshot = self.snapshot(collection);
        let publisher = self
            .publishers
            .entry(collection.to_string())
            .or_insert_with(|| watch::channel(snapshot).0);
        publisher.subscribe()
    }
}

/// In-memory blob store
#[derive(Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<DashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.blobs.contains_key(path)
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> StoreResult<()> {
        self.blobs.insert(path.to_string(), bytes);
        Ok(())
    }

    async fn download_url(&self, path: &str) -> StoreResult<String> {
        if self.blobs.contains_key(path) {
            Ok(format!("memory://{path}"))
        } else {
            Err(StoreError::NotFound(path.to_string()))
        }
    }

    async fn delete(&self, path: &str) -> StoreResult<()> {
        self.blobs
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(path.to_string()))
    }
}

/// In-process identity provider with a single configured account
pub struct MemoryIdentity {
    account: AuthUser,
    current: watch::Sender<Option<AuthUser>>,
}

impl MemoryIdentity {
    pub fn new(account: AuthUser) -> Self {
        Self {
            account,
            current: watch::channel(None).0,
        }
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentity {
    fn watch_user(&self) -> watch::Receiver<Option<AuthUser>> {
        self.current.subscribe()
    }

    async fn sign_in(&self) -> StoreResult<AuthUser> {
        self.current.send_replace(Some(self.account.clone()));
        Ok(self.account.clone())
    }

    async fn sign_out(&self) -> StoreResult<()> {
        self.current.send_replace(None);
        Ok(())
    }
}
