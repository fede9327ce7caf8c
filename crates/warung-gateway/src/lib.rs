//! Warung — API Gateway.
//!
//! The single public entry point. `/api/users*` and `/api/orders*`
//! mirror the two backends one-to-one; the gateway holds no state
//! beyond the two service URLs.

use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod docs;
pub mod health;
pub mod proxy;
pub mod state;

/// Build the full gateway router. The binary and the integration tests
/// serve exactly this.
pub fn app(state: state::GatewayState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(docs::router())
        .merge(proxy::router())
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// One line per incoming request: method and URL.
async fn log_request(req: Request, next: Next) -> Response {
    tracing::info!(method = %req.method(), uri = %req.uri(), "incoming request");
    next.run(req).await
}
