//! MongoDB connection management and the document store built on it.

mod config;
mod connector;
mod error;
mod health;
pub mod mapper;
mod store;

pub use config::{DEFAULT_DATABASE, MongoConfig};
pub use connector::{connect_from_config, connect_from_config_with_retry};
pub use error::{StoreError, StoreResult};
pub use health::{HealthStatus, check_health, check_health_detailed, collection_names};
pub use mapper::{Identified, from_document, parse_object_id, prepare_insert};
pub use store::{DocumentStore, EqualityFilter, MongoDocumentStore, SharedStore};

pub use mongodb::bson::{Bson, Document, oid::ObjectId};
pub use mongodb::{Client, Database};
