//! HTTP handlers for the product catalog

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestInvalidIdResponse, BadRequestValidationResponse, DatabaseErrorResponse,
        NotFoundResponse, ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Category, CreatedResponse, Product, ProductQuery, SeedResponse, StoredProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the product catalog
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        list_categories,
        get_product,
        seed_products,
    ),
    components(
        schemas(Product, StoredProduct, CreatedResponse, Category, SeedResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestInvalidIdResponse,
            ServiceUnavailableResponse,
            DatabaseErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/categories", get(list_categories))
        .route("/seed", post(seed_products))
        .route("/{id}", get(get_product))
        .with_state(shared_service)
}

/// List products, optionally filtered by category
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Products in the catalog", body = Vec<StoredProduct>),
        (status = 500, response = DatabaseErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<ProductQuery>,
) -> ProductResult<Json<Vec<StoredProduct>>> {
    let products = service.list_products(query.category.as_deref()).await?;
    Ok(Json(products))
}

/// Add a product to the catalog
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 201, description = "Product created", body = CreatedResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = DatabaseErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<Product>,
) -> ProductResult<impl IntoResponse> {
    let id = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Storefront categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Products",
    responses(
        (status = 200, description = "Category descriptors", body = Vec<Category>)
    )
)]
async fn list_categories<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> Json<Vec<Category>> {
    Json(service.categories())
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (24 hex digits)")
    ),
    responses(
        (status = 200, description = "Product found", body = StoredProduct),
        (status = 400, response = BadRequestInvalidIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<StoredProduct>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Populate an empty catalog with the starter products
#[utoipa::path(
    post,
    path = "/seed",
    tag = "Products",
    responses(
        (status = 200, description = "Seed result", body = SeedResponse),
        (status = 500, response = DatabaseErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn seed_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<SeedResponse>> {
    let outcome = service.seed_products().await?;
    Ok(Json(outcome.into()))
}
