//! Shared test helpers for gateway end-to-end tests.
//!
//! Spins up real user and order services on ephemeral ports, seeded
//! over in-memory stores, and drives the gateway router against them.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use warung_gateway::state::GatewayState;
use warung_test_support::{memory_pool, spawn_router};

/// Build the gateway over live, seeded backends.
pub async fn build_test_gateway() -> Router {
    let user_pool = memory_pool().await;
    let user_repo = warung_user_service::repository::UserRepository::new(user_pool);
    user_repo.init().await.expect("user schema init");
    let user_app =
        warung_user_service::app(warung_user_service::state::AppState::new(user_repo));
    let user_url = spawn_router(user_app).await;

    let order_pool = memory_pool().await;
    let order_repo = warung_order_service::repository::OrderRepository::new(order_pool);
    order_repo.init().await.expect("order schema init");
    let users_client = warung_order_service::client::UserServiceClient::new(
        warung_core::http::client().expect("http client"),
        user_url.clone(),
    );
    let order_app = warung_order_service::app(warung_order_service::state::AppState::new(
        order_repo,
        users_client,
    ));
    let order_url = spawn_router(order_app).await;

    let state = GatewayState::new(
        warung_core::http::client().expect("http client"),
        user_url,
        order_url,
    );
    warung_gateway::app(state)
}

/// Build a gateway whose backends are unreachable.
pub fn build_offline_gateway() -> Router {
    let state = GatewayState::new(
        warung_core::http::client().expect("http client"),
        "http://127.0.0.1:9".to_string(),
        "http://127.0.0.1:9".to_string(),
    );
    warung_gateway::app(state)
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
