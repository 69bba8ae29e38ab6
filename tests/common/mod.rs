use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use receipt_processor::application::engine::ReceiptProcessor;
use receipt_processor::infrastructure::in_memory::InMemoryReceiptStore;
use receipt_processor::interfaces::http::create_router;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

pub fn create_test_app() -> Router {
    let store = Arc::new(InMemoryReceiptStore::new());
    create_router(ReceiptProcessor::new(store))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub async fn post_receipt(app: &Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/receipts/process")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    send(app, request).await
}

pub async fn get_points(app: &Router, id: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(format!("/receipts/{id}/points"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}
