//! Shared test helpers for Order Service integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use warung_order_service::client::UserServiceClient;
use warung_order_service::repository::OrderRepository;
use warung_order_service::state::AppState;

/// Build the full app router over a fresh pool, pointing the user
/// client at `user_base_url`. Serves the same routes as `main.rs`.
pub async fn build_test_app(pool: SqlitePool, user_base_url: &str) -> Router {
    let repo = OrderRepository::new(pool);
    repo.init().await.expect("schema init");
    let users = UserServiceClient::new(
        warung_core::http::client().expect("http client"),
        user_base_url.to_string(),
    );
    warung_order_service::app(AppState::new(repo, users))
}

/// Build the app with a user client aimed at a dead address, for tests
/// that never reach the composite call.
pub async fn build_offline_test_app(pool: SqlitePool) -> Router {
    build_test_app(pool, "http://127.0.0.1:9").await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
    (status, json)
}

/// Send a GET request and return status plus decoded JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a POST request with a JSON body.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Send a PUT request with a JSON body.
pub async fn put_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Send a DELETE request.
pub async fn delete_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}
