//! OpenAPI document, served as JSON at `/api-docs`.
//!
//! The proxied `/api/*` paths mirror the backend services; their full
//! schemas live in each backend's own `/api-docs`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::health::{self, HealthResponse, ServiceUrls};
use crate::state::GatewayState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Warung API Gateway",
        description = "Public surface. /api/users* and /api/orders* mirror the \
                       User Service and Order Service one-to-one."
    ),
    paths(health::health_check),
    components(schemas(HealthResponse, ServiceUrls))
)]
struct ApiDoc;

async fn serve_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Returns the `/api-docs` router.
pub fn router() -> Router<GatewayState> {
    Router::new().route("/api-docs", get(serve_docs))
}
