//! Translation between typed records and stored BSON documents.
//!
//! Stored documents carry the store-assigned `_id` (an [`ObjectId`]); records
//! leaving the service carry it as a plain string `id` instead. Neither side
//! ever sees both.

use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson::{self, Bson, Document, oid::ObjectId};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::error::{StoreError, StoreResult};

pub const STORE_ID_FIELD: &str = "_id";
pub const ID_FIELD: &str = "id";
pub const CREATED_AT_FIELD: &str = "created_at";
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// A decoded record together with its store identifier.
///
/// Serializes flat: `{ "id": "...", ...record fields }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identified<T> {
    pub id: String,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Identified<T> {
    pub fn new(id: impl Into<String>, record: T) -> Self {
        Self {
            id: id.into(),
            record,
        }
    }
}

/// Parse the string form of a store identifier
pub fn parse_object_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
}

/// Serialize `record` into a document without any identifier fields
pub fn to_document<T: Serialize>(record: &T) -> StoreResult<Document> {
    let mut doc = bson::to_document(record)?;
    doc.remove(STORE_ID_FIELD);
    doc.remove(ID_FIELD);
    Ok(doc)
}

/// Set both timestamps to `now`, replacing whatever the payload carried
pub fn stamp_timestamps(doc: &mut Document, now: DateTime<Utc>) {
    let stamp = now.to_rfc3339_opts(SecondsFormat::Micros, true);
    doc.insert(CREATED_AT_FIELD, stamp.clone());
    doc.insert(UPDATED_AT_FIELD, stamp);
}

/// Build the document persisted for a new record
pub fn prepare_insert<T: Serialize>(record: &T, now: DateTime<Utc>) -> StoreResult<Document> {
    let mut doc = to_document(record)?;
    stamp_timestamps(&mut doc, now);
    Ok(doc)
}

/// Decode a stored document, moving `_id` into [`Identified::id`]
pub fn from_document<T: DeserializeOwned>(mut doc: Document) -> StoreResult<Identified<T>> {
    let id = match doc.remove(STORE_ID_FIELD) {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(id)) => id,
        Some(other) => {
            return Err(StoreError::Decode(format!(
                "unsupported identifier type {:?}",
                other.element_type()
            )));
        }
        None => return Err(StoreError::Decode("document has no _id".to_string())),
    };
    doc.remove(ID_FIELD);

    let record = bson::from_document(doc)?;
    Ok(Identified { id, record })
}
