//! Products Domain
//!
//! Product catalog backed by the shared document store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, id parsing, seeding
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + document store implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product record, categories, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use database::mongodb::{MongoDocumentStore, SharedStore};
//! use domain_products::{handlers, ProductService, StoreProductRepository};
//! use std::sync::Arc;
//!
//! let store: SharedStore = Arc::new(MongoDocumentStore::new(db));
//! let service = ProductService::new(StoreProductRepository::new(store));
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
pub mod service;
pub mod store;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CATEGORIES, Category, CreatedResponse, PRODUCT_COLLECTION, Product, ProductQuery,
    SeedResponse, StoredProduct,
};
pub use repository::ProductRepository;
pub use service::{ProductService, SeedOutcome};
pub use store::StoreProductRepository;
