//! API routes module

pub mod diagnostics;
pub mod health;
pub mod orders;
pub mod products;

use axum::Router;
use axum_helpers::server::{create_router_with_cors, health_router};
use tower_http::cors::CorsLayer;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/orders", orders::router(state))
        .merge(health::router(state.clone()))
}

/// The complete application: docs, `/api`, diagnostics and liveness
pub fn app(state: &AppState, cors_layer: CorsLayer) -> Router {
    create_router_with_cors::<ApiDoc>(routes(state), cors_layer)
        .merge(diagnostics::router(state.clone()))
        .merge(health_router(state.config.app))
}
