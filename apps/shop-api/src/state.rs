//! Shared application state passed to every route builder.

use database::mongodb::{Client, Database, MongoDocumentStore, SharedStore};
use std::sync::Arc;

use crate::config::Config;

/// Cloned per router (cheap handle clones).
///
/// `db` is `None` when the service runs without a store; `store` is then an
/// unavailable store and data endpoints answer 503.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mongo_client: Option<Client>,
    pub db: Option<Database>,
    pub store: SharedStore,
}

impl AppState {
    /// State backed by a live MongoDB connection
    pub fn connected(config: Config, client: Client, database: &str) -> Self {
        let db = client.database(database);
        Self {
            store: Arc::new(MongoDocumentStore::new(db.clone())),
            mongo_client: Some(client),
            db: Some(db),
            config,
        }
    }

    /// State with no store connection
    pub fn offline(config: Config) -> Self {
        Self {
            config,
            mongo_client: None,
            db: None,
            store: Arc::new(MongoDocumentStore::unavailable()),
        }
    }

    #[cfg(test)]
    pub fn with_store(config: Config, store: SharedStore) -> Self {
        Self {
            config,
            mongo_client: None,
            db: None,
            store,
        }
    }
}
