//! Handler tests for Products domain
//!
//! These tests drive the products router with `oneshot()` on top of the
//! in-memory repository:
//! - Request deserialization and required-field checks
//! - Response serialization
//! - HTTP status codes and error bodies

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::ErrorResponse;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> (Router, InMemoryProductRepository) {
    let repo = InMemoryProductRepository::new();
    let router = handlers::router(ProductService::new(repo.clone()));
    (router, repo)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn seed(repo: &InMemoryProductRepository, name: &str, price: i32) -> Product {
    repo.save(Product::from_data(ProductData::new(name, "Acme", price)).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_product_returns_201() {
    let (app, repo) = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({"name": "Pencil", "maker": "Acme", "price": 500}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, Some(1));
    assert_eq!(product.name, "Pencil");
    assert_eq!(repo.find_all().await.unwrap(), vec![product]);
}

#[tokio::test]
async fn test_create_product_missing_field_returns_400() {
    let (app, repo) = app();

    let response = app
        .oneshot(json_request("POST", "/", json!({"name": "Pencil", "price": 500})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "BAD_REQUEST");
    assert_eq!(error.message, "Missing or blank required field: maker");
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_product_blank_name_returns_400() {
    let (app, _repo) = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({"name": "  ", "maker": "Acme", "price": 500}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert!(error.message.ends_with(": name"));
}

#[tokio::test]
async fn test_create_product_malformed_json_is_rejected() {
    let (app, _repo) = app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_non_numeric_price_returns_400() {
    let (app, repo) = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({"name": "Pencil", "maker": "Acme", "price": "abc"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "JSON_EXTRACTION");
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_products_in_id_order() {
    let (app, repo) = app();
    seed(&repo, "Pencil", 500).await;
    seed(&repo, "Eraser", 300).await;

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Pencil", "Eraser"]);
}

#[tokio::test]
async fn test_list_products_empty() {
    let (app, _repo) = app();

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_get_product() {
    let (app, repo) = app();
    let pencil = seed(&repo, "Pencil", 500).await;

    let response = app.oneshot(empty_request("GET", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product, pencil);
}

#[tokio::test]
async fn test_get_missing_product_returns_404() {
    let (app, _repo) = app();

    let response = app.oneshot(empty_request("GET", "/100")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "NOT_FOUND");
    assert_eq!(error.message, "Product not found");
}

#[tokio::test]
async fn test_non_numeric_id_returns_400() {
    let (app, _repo) = app();

    let response = app.oneshot(empty_request("GET", "/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "INVALID_ID");
}

#[tokio::test]
async fn test_patch_updates_present_fields_only() {
    let (app, repo) = app();
    seed(&repo, "Pencil", 500).await;

    let response = app
        .oneshot(json_request("PATCH", "/1", json!({"price": 750})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name, "Pencil");
    assert_eq!(product.maker, "Acme");
    assert_eq!(product.price, 750);

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.price, 750);
}

#[tokio::test]
async fn test_put_is_alias_for_patch() {
    let (app, repo) = app();
    seed(&repo, "Pencil", 500).await;

    let response = app
        .oneshot(json_request("PUT", "/1", json!({"maker": "Globex"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.maker, "Globex");
    assert_eq!(product.price, 500);
}

#[tokio::test]
async fn test_patch_blank_field_returns_400_and_keeps_product() {
    let (app, repo) = app();
    let pencil = seed(&repo, "Pencil", 500).await;

    let response = app
        .oneshot(json_request("PATCH", "/1", json!({"name": "", "price": 1})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(repo.find_by_id(1).await.unwrap(), Some(pencil));
}

#[tokio::test]
async fn test_patch_missing_product_returns_404() {
    let (app, _repo) = app();

    let response = app
        .oneshot(json_request("PATCH", "/100", json!({"price": 1})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_returns_removed_product() {
    let (app, repo) = app();
    let pencil = seed(&repo, "Pencil", 500).await;

    let response = app.oneshot(empty_request("DELETE", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let deleted: Product = json_body(response.into_body()).await;
    assert_eq!(deleted, pencil);
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_product_returns_404() {
    let (app, _repo) = app();

    let response = app.oneshot(empty_request("DELETE", "/100")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
