//! Collection-name-parameterized access to the document store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document, doc, oid::ObjectId},
};
use std::sync::Arc;
use tracing::instrument;

use super::error::{StoreError, StoreResult};

/// Exactly one `field == value` condition
#[derive(Debug, Clone, PartialEq)]
pub struct EqualityFilter {
    pub field: String,
    pub value: Bson,
}

impl EqualityFilter {
    pub fn new(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert(self.field.clone(), self.value.clone());
        doc
    }

    /// Whether `doc` satisfies the condition
    pub fn matches(&self, doc: &Document) -> bool {
        doc.get(&self.field) == Some(&self.value)
    }
}

/// Raw document operations against named collections.
///
/// Implementations assign a fresh [`ObjectId`] to every inserted document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_one(&self, collection: &str, doc: Document) -> StoreResult<ObjectId>;

    /// Insert all documents, returning their ids in input order
    async fn insert_many(&self, collection: &str, docs: Vec<Document>)
    -> StoreResult<Vec<ObjectId>>;

    async fn find_many(
        &self,
        collection: &str,
        filter: Option<EqualityFilter>,
    ) -> StoreResult<Vec<Document>>;

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>>;

    async fn count(&self, collection: &str) -> StoreResult<u64>;
}

/// Store handle shared by every repository
pub type SharedStore = Arc<dyn DocumentStore>;

/// [`DocumentStore`] backed by a MongoDB database.
///
/// Built with [`MongoDocumentStore::unavailable`] when no connection exists;
/// every operation then fails with [`StoreError::Unavailable`].
#[derive(Clone, Debug)]
pub struct MongoDocumentStore {
    db: Option<Database>,
}

impl MongoDocumentStore {
    pub fn new(db: Database) -> Self {
        Self { db: Some(db) }
    }

    pub fn unavailable() -> Self {
        Self { db: None }
    }

    pub fn is_available(&self) -> bool {
        self.db.is_some()
    }

    pub fn database(&self) -> Option<&Database> {
        self.db.as_ref()
    }

    fn collection(&self, name: &str) -> StoreResult<Collection<Document>> {
        self.db
            .as_ref()
            .map(|db| db.collection::<Document>(name))
            .ok_or(StoreError::Unavailable)
    }
}

fn inserted_object_id(id: Bson) -> StoreResult<ObjectId> {
    match id {
        Bson::ObjectId(oid) => Ok(oid),
        other => Err(StoreError::Decode(format!(
            "store returned non-ObjectId identifier {other}"
        ))),
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    #[instrument(skip(self, doc))]
    async fn insert_one(&self, collection: &str, doc: Document) -> StoreResult<ObjectId> {
        let result = self.collection(collection)?.insert_one(doc).await?;
        let id = inserted_object_id(result.inserted_id)?;

        tracing::debug!(%id, "Document inserted");
        Ok(id)
    }

    #[instrument(skip(self, docs), fields(count = docs.len()))]
    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> StoreResult<Vec<ObjectId>> {
        let coll = self.collection(collection)?;
        if docs.is_empty() {
            return Ok(Vec::new());
        }

        let result = coll.insert_many(docs).await?;
        let mut ids: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
        ids.sort_by_key(|(index, _)| *index);

        ids.into_iter()
            .map(|(_, id)| inserted_object_id(id))
            .collect()
    }

    #[instrument(skip(self))]
    async fn find_many(
        &self,
        collection: &str,
        filter: Option<EqualityFilter>,
    ) -> StoreResult<Vec<Document>> {
        let query = filter
            .as_ref()
            .map(EqualityFilter::to_document)
            .unwrap_or_default();

        let cursor = self.collection(collection)?.find(query).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        let doc = self
            .collection(collection)?
            .find_one(doc! { "_id": id })
            .await?;
        Ok(doc)
    }

    #[instrument(skip(self))]
    async fn count(&self, collection: &str) -> StoreResult<u64> {
        let count = self
            .collection(collection)?
            .count_documents(doc! {})
            .await?;
        Ok(count)
    }
}
