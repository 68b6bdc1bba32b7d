//! Handler tests for the products domain
//!
//! These exercise the products router alone against an in-memory document
//! store: request parsing, status codes and response bodies.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use test_utils::{InMemoryDocumentStore, TestDataBuilder};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app_with_store(store: Arc<InMemoryDocumentStore>) -> Router {
    let repo = StoreProductRepository::new(store);
    handlers::router(ProductService::new(repo))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_create_then_get_product() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let builder = TestDataBuilder::from_test_name("create_then_get");
    let name = builder.name("iphone", "pro");
    let price = builder.price();

    let response = app_with_store(store.clone())
        .oneshot(post_json(
            "/",
            json!({
                "name": name,
                "price": price,
                "description": "Unlocked, original box",
                "category": "preowned",
                "is_new": false,
                "condition": "excellent",
                "grade": "A",
                "storage": "256GB",
                "color": "Space Black",
                "images": ["https://img.example/a.jpg", "https://img.example/b.jpg"],
                "stock": 3
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: CreatedResponse = json_body(response.into_body()).await;
    test_utils::assertions::assert_object_id(&created.id, "created product id");

    let response = app_with_store(store)
        .oneshot(get(&format!("/{}", created.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["id"], created.id);
    assert!(body.get("_id").is_none());
    assert_eq!(body["name"], name);
    assert_eq!(body["price"], price);
    assert_eq!(body["description"], "Unlocked, original box");
    assert_eq!(body["category"], "preowned");
    assert_eq!(body["is_new"], false);
    assert_eq!(body["condition"], "excellent");
    assert_eq!(body["grade"], "A");
    assert_eq!(body["storage"], "256GB");
    assert_eq!(body["color"], "Space Black");
    assert_eq!(
        body["images"],
        json!(["https://img.example/a.jpg", "https://img.example/b.jpg"])
    );
    assert_eq!(body["stock"], 3);
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
}

#[tokio::test]
async fn test_create_product_applies_defaults() {
    let store = Arc::new(InMemoryDocumentStore::new());

    let response = app_with_store(store.clone())
        .oneshot(post_json(
            "/",
            json!({ "name": "Pixel 8", "price": 499.0, "category": "new" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: CreatedResponse = json_body(response.into_body()).await;

    let response = app_with_store(store)
        .oneshot(get(&format!("/{}", created.id)))
        .await
        .unwrap();
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["is_new"], true);
    assert_eq!(body["stock"], 0);
    assert_eq!(body["images"], json!([]));
}

#[tokio::test]
async fn test_create_product_validation_error() {
    let store = Arc::new(InMemoryDocumentStore::new());

    let response = app_with_store(store.clone())
        .oneshot(post_json(
            "/",
            json!({ "name": "", "price": -1.0, "category": "new" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["name"].is_array());
    assert!(body["details"]["price"].is_array());
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_create_product_missing_required_field() {
    let store = Arc::new(InMemoryDocumentStore::new());

    let response = app_with_store(store.clone())
        .oneshot(post_json("/", json!({ "name": "No price", "category": "new" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "JSON_EXTRACTION");
    assert_eq!(body["details"]["price"][0]["code"], "missing");
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_create_product_wrong_type_names_field() {
    let store = Arc::new(InMemoryDocumentStore::new());

    let response = app_with_store(store.clone())
        .oneshot(post_json(
            "/",
            json!({ "name": "Pixel 8", "price": "cheap", "category": "new" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "JSON_EXTRACTION");
    assert_eq!(body["details"]["price"][0]["code"], "type");
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_list_products_filters_by_category() {
    let store = Arc::new(InMemoryDocumentStore::new());
    for (name, category) in [("A", "new"), ("B", "preowned"), ("C", "new")] {
        let response = app_with_store(store.clone())
            .oneshot(post_json(
                "/",
                json!({ "name": name, "price": 1.0, "category": category }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app_with_store(store.clone())
        .oneshot(get("/?category=new"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<StoredProduct> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.product.category == "new"));

    let response = app_with_store(store.clone()).oneshot(get("/")).await.unwrap();
    let products: Vec<StoredProduct> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 3);

    let response = app_with_store(store)
        .oneshot(get("/?category="))
        .await
        .unwrap();
    let products: Vec<StoredProduct> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn test_get_product_malformed_id_returns_400() {
    let app = app_with_store(Arc::new(InMemoryDocumentStore::new()));

    let response = app.oneshot(get("/not-an-object-id")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_get_product_absent_id_returns_404() {
    let app = app_with_store(Arc::new(InMemoryDocumentStore::new()));
    let builder = TestDataBuilder::from_test_name("absent_id");

    let response = app
        .oneshot(get(&format!("/{}", builder.object_id_hex())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn test_seed_is_applied_once() {
    let store = Arc::new(InMemoryDocumentStore::new());

    let response = app_with_store(store.clone())
        .oneshot(post_json("/seed", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "status": "ok", "inserted": 4 }));

    let response = app_with_store(store.clone())
        .oneshot(post_json("/seed", json!({})))
        .await
        .unwrap();
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({ "status": "ok", "message": "Products already exist", "count": 4 })
    );
    assert_eq!(store.documents(PRODUCT_COLLECTION).len(), 4);
}

#[tokio::test]
async fn test_list_categories() {
    let app = app_with_store(Arc::new(InMemoryDocumentStore::new()));

    let response = app.oneshot(get("/categories")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    let keys: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, ["new", "preowned", "accessories"]);
}

#[tokio::test]
async fn test_unavailable_store_returns_503() {
    let store = Arc::new(InMemoryDocumentStore::unavailable());

    let requests = [
        get("/"),
        get(&format!("/{}", TestDataBuilder::new(7).object_id_hex())),
        post_json("/seed", json!({})),
        post_json("/", json!({ "name": "x", "price": 1.0, "category": "new" })),
    ];

    for request in requests {
        let response = app_with_store(store.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["error"], "SERVICE_UNAVAILABLE");
    }
}
