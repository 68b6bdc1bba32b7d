//! Products API routes

use axum::Router;
use domain_products::{ProductService, StoreProductRepository, handlers};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = StoreProductRepository::new(state.store.clone());
    handlers::router(ProductService::new(repository))
}
