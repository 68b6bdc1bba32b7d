//! In-process `DocumentStore` for tests that do not need a real server.

use async_trait::async_trait;
use database::mongodb::{
    Document, DocumentStore, EqualityFilter, ObjectId, StoreError, StoreResult,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Documents kept per collection in insertion order.
///
/// Every insert assigns a fresh `ObjectId` as `_id`, like MongoDB does.
/// [`InMemoryDocumentStore::unavailable`] builds a store that rejects every
/// call with `StoreError::Unavailable`.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    writes: AtomicUsize,
    unavailable: bool,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of documents written through insert calls
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Snapshot of a collection's stored documents, `_id` included
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.lock()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<Document>>> {
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }

    fn store(&self, collection: &str, mut doc: Document) -> ObjectId {
        let id = ObjectId::new();
        doc.insert("_id", id);
        self.lock()
            .entry(collection.to_string())
            .or_default()
            .push(doc);
        self.writes.fetch_add(1, Ordering::SeqCst);
        id
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert_one(&self, collection: &str, doc: Document) -> StoreResult<ObjectId> {
        self.check_available()?;
        Ok(self.store(collection, doc))
    }

    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> StoreResult<Vec<ObjectId>> {
        self.check_available()?;
        Ok(docs
            .into_iter()
            .map(|doc| self.store(collection, doc))
            .collect())
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Option<EqualityFilter>,
    ) -> StoreResult<Vec<Document>> {
        self.check_available()?;
        Ok(self
            .documents(collection)
            .into_iter()
            .filter(|doc| filter.as_ref().is_none_or(|f| f.matches(doc)))
            .collect())
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        self.check_available()?;
        Ok(self
            .documents(collection)
            .into_iter()
            .find(|doc| doc.get_object_id("_id").ok() == Some(id)))
    }

    async fn count(&self, collection: &str) -> StoreResult<u64> {
        self.check_available()?;
        Ok(self.documents(collection).len() as u64)
    }
}
