//! HTTP handlers for checkout

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, DatabaseErrorResponse, ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::OrderResult;
use crate::models::{Address, Customer, Order, OrderCreated, OrderItem, OrderStatus};
use crate::repository::OrderRepository;
use crate::service::OrderService;

/// OpenAPI documentation for checkout
#[derive(OpenApi)]
#[openapi(
    paths(create_order),
    components(
        schemas(Order, OrderItem, Customer, Address, OrderStatus, OrderCreated),
        responses(
            BadRequestValidationResponse,
            ServiceUnavailableResponse,
            DatabaseErrorResponse
        )
    ),
    tags(
        (name = "Orders", description = "Checkout endpoints")
    )
)]
pub struct ApiDoc;

/// Create the orders router
pub fn router<R: OrderRepository + 'static>(service: OrderService<R>) -> Router {
    Router::new()
        .route("/", post(create_order))
        .with_state(Arc::new(service))
}

/// Submit an order
#[utoipa::path(
    post,
    path = "",
    tag = "Orders",
    request_body = Order,
    responses(
        (status = 201, description = "Order received", body = OrderCreated),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = DatabaseErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    ValidatedJson(input): ValidatedJson<Order>,
) -> OrderResult<impl IntoResponse> {
    let id = service.create_order(input).await?;
    Ok((StatusCode::CREATED, Json(OrderCreated::received(id))))
}
