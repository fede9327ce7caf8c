//! Warung — Order Service.
//!
//! Owns `orders.db` and exposes CRUD under `/orders`, plus the composite
//! `/orders/{id}/with-user` read that enriches an order with live user
//! data fetched from the User Service.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod client;
pub mod docs;
pub mod models;
pub mod repository;
pub mod routes;
pub mod state;

/// Build the full service router. The binary and the integration tests
/// serve exactly this.
pub fn app(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .merge(docs::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
