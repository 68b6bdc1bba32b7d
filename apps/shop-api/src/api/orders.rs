//! Orders API routes

use axum::Router;
use domain_orders::{OrderService, StoreOrderRepository, handlers};

use crate::state::AppState;

/// Create orders router
pub fn router(state: &AppState) -> Router {
    let repository = StoreOrderRepository::new(state.store.clone());
    handlers::router(OrderService::new(repository))
}
