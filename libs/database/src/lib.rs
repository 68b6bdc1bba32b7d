//! Database library for the shop services.
//!
//! Wraps MongoDB connection management and exposes the two layers every domain
//! crate persists through:
//!
//! - [`mongodb::DocumentStore`]: collection-name-parameterized accessor
//!   (insert, equality find, find by id, count). [`mongodb::MongoDocumentStore`]
//!   is the production implementation; it can be built in an "unavailable"
//!   state when no connection was established at startup.
//! - [`mongodb::mapper`]: translation between typed records and BSON documents,
//!   including the `_id` (ObjectId) to `id` (string) substitution.
//!
//! # Features
//!
//! - `config` - Loading [`mongodb::MongoConfig`] through `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig, MongoDocumentStore, SharedStore};
//! use std::sync::Arc;
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "shop");
//! let client = mongodb::connect_from_config(&config).await?;
//! let store: SharedStore = Arc::new(MongoDocumentStore::new(client.database("shop")));
//! ```

pub mod common;
pub mod mongodb;

pub use common::{RetryConfig, truncate_diagnostic};
pub use mongodb::{StoreError, StoreResult};
