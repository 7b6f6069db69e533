//! Handler tests for Products domain
//!
//! Drive the full router, service and in-memory repository through HTTP requests:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization and status codes
//! - Error bodies
//!
//! No database is involved; see `integration_test.rs` for PostgreSQL.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app(repository: InMemoryProductRepository) -> Router {
    handlers::router(ProductService::new(repository))
}

fn polera(sku: &str) -> Value {
    json!({
        "sku": sku,
        "name": "Polera",
        "brand": "CAT",
        "size": "XL",
        "price": 20000.00,
        "principal_image": "https://images.example.com/polera.jpg",
        "other_images": ["https://images.example.com/polera-back.jpg"]
    })
}

fn send(method: &str, uri: &str, body: Option<&Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn seed(repository: &InMemoryProductRepository, sku: &str) {
    let product: Product = serde_json::from_value(polera(sku)).unwrap();
    repository.save(&product).await.unwrap();
}

#[tokio::test]
async fn test_create_product_returns_201_and_is_retrievable() {
    let repository = InMemoryProductRepository::new();

    let response = app(repository.clone())
        .oneshot(send("POST", "/", Some(&polera("FAL-1000000"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Product = json_body(response.into_body()).await;
    assert_eq!(created.sku, "FAL-1000000");
    assert_eq!(created.price, 20000.0);

    let response = app(repository)
        .oneshot(send("GET", "/FAL-1000000", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_with_short_sku_returns_422() {
    let repository = InMemoryProductRepository::new();

    let response = app(repository.clone())
        .oneshot(send("POST", "/", Some(&polera("FAL-100000"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({ "message": "invalid sku format (right format: FAL-XXXXXXX)" })
    );
    assert!(repository.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_duplicate_returns_409() {
    let repository = InMemoryProductRepository::new();
    seed(&repository, "FAL-1000000").await;

    let response = app(repository)
        .oneshot(send("POST", "/", Some(&polera("FAL-1000000"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "duplicated sku");
}

#[tokio::test]
async fn test_create_with_short_name_returns_422() {
    let mut payload = polera("FAL-1000000");
    payload["name"] = json!("Po");

    let response = app(InMemoryProductRepository::new())
        .oneshot(send("POST", "/", Some(&payload)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "name must be between 3 and 50");
}

#[tokio::test]
async fn test_create_with_malformed_json_returns_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app(InMemoryProductRepository::new())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_without_content_type_returns_415() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(polera("FAL-1000000").to_string()))
        .unwrap();

    let response = app(InMemoryProductRepository::new())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_list_products_empty_and_ordered() {
    let repository = InMemoryProductRepository::new();

    let response = app(repository.clone())
        .oneshot(send("GET", "/", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());

    seed(&repository, "FAL-2000000").await;
    seed(&repository, "FAL-1000000").await;

    let response = app(repository).oneshot(send("GET", "/", None)).await.unwrap();
    let products: Vec<Product> = json_body(response.into_body()).await;
    let skus: Vec<&str> = products.iter().map(|p| p.sku.as_str()).collect();
    assert_eq!(skus, vec!["FAL-1000000", "FAL-2000000"]);
}

#[tokio::test]
async fn test_get_missing_product_returns_404() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(send("GET", "/FAL-9999999", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "message": "record not found" }));
}

#[tokio::test]
async fn test_update_to_existing_sku_returns_409_without_write() {
    let repository = InMemoryProductRepository::new();
    seed(&repository, "FAL-1000000").await;
    seed(&repository, "FAL-1000011").await;

    let mut payload = polera("FAL-1000011");
    payload["name"] = json!("Polera Pro");

    let response = app(repository.clone())
        .oneshot(send("PUT", "/FAL-1000000", Some(&payload)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "duplicated sku");

    assert_eq!(repository.get_by_sku("FAL-1000000").await.unwrap().name, "Polera");
    assert_eq!(repository.get_by_sku("FAL-1000011").await.unwrap().name, "Polera");
}

#[tokio::test]
async fn test_update_changes_sku_and_fields() {
    let repository = InMemoryProductRepository::new();
    seed(&repository, "FAL-1000000").await;

    let mut payload = polera("FAL-2000000");
    payload["price"] = json!(25000.5);

    let response = app(repository.clone())
        .oneshot(send("PUT", "/FAL-1000000", Some(&payload)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.sku, "FAL-2000000");
    assert_eq!(updated.price, 25000.5);

    assert!(repository.get_by_sku("FAL-1000000").await.is_err());
}

#[tokio::test]
async fn test_update_with_same_payload_returns_current() {
    let repository = InMemoryProductRepository::new();
    seed(&repository, "FAL-1000000").await;

    let response = app(repository)
        .oneshot(send("PUT", "/FAL-1000000", Some(&polera("FAL-1000000"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.sku, "FAL-1000000");
}

#[tokio::test]
async fn test_update_missing_product_returns_404() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(send("PUT", "/FAL-9999999", Some(&polera("FAL-9999999"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_bad_secondary_image_returns_422() {
    let repository = InMemoryProductRepository::new();
    seed(&repository, "FAL-1000000").await;

    let mut payload = polera("FAL-1000000");
    payload["other_images"] = json!(["https://images.example.com/ok.jpg", "/broken"]);

    let response = app(repository)
        .oneshot(send("PUT", "/FAL-1000000", Some(&payload)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "url => /broken with wrong format");
}

#[tokio::test]
async fn test_delete_then_find_returns_404() {
    let repository = InMemoryProductRepository::new();
    seed(&repository, "FAL-1000000").await;

    let response = app(repository.clone())
        .oneshot(send("DELETE", "/FAL-1000000", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app(repository.clone())
        .oneshot(send("GET", "/FAL-1000000", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app(repository)
        .oneshot(send("DELETE", "/FAL-1000000", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_out_of_bounds_product_never_reaches_storage() {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository.clone());

    let mut product: Product = serde_json::from_value(polera("FAL-1000000")).unwrap();
    product.name = "ab".into();
    product.brand = "x".repeat(80);
    product.price = -5.0;

    let result = service.create_product(product).await;

    assert!(matches!(result, Err(ProductError::Validation(_))));
    assert!(repository.get_all().await.unwrap().is_empty());
}
