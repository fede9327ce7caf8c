//! Gateway health endpoint. Answers without contacting the backends.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::GatewayState;

/// Health check response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// Always `true`.
    pub success: bool,
    /// Fixed status line.
    pub message: String,
    /// Current time, RFC 3339.
    pub timestamp: String,
    /// Configured backend locations.
    pub services: ServiceUrls,
}

/// The two backend base URLs as configured at startup.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ServiceUrls {
    #[serde(rename = "userService")]
    pub user_service: String,
    #[serde(rename = "orderService")]
    pub order_service: String,
}

/// GET /health
#[utoipa::path(get, path = "/health", tag = "gateway",
    responses((status = 200, description = "Gateway is up", body = HealthResponse)))]
pub(crate) async fn health_check(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "API Gateway is running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        services: ServiceUrls {
            user_service: state.user_service_url,
            order_service: state.order_service_url,
        },
    })
}

/// Returns the health check router.
pub fn router() -> Router<GatewayState> {
    Router::new().route("/health", get(health_check))
}
