//! Proxying of `/api/*` to the backend services.
//!
//! Each public path is registered explicitly and forwarded with the
//! `/api` prefix stripped. Request bodies (POST/PUT) and the query
//! string travel verbatim; 2xx responses pass through untouched.
//!
//! Upstream failures keep the source system's observable behavior:
//! the upstream status is propagated only for GETs of a single
//! resource, and coerced to 500 everywhere else.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};

use warung_core::envelope::ErrorResponse;

use crate::state::GatewayState;

/// Cap on proxied request bodies.
const BODY_LIMIT: usize = 1024 * 1024;

/// Which backend a public path maps to.
#[derive(Debug, Clone, Copy)]
enum Backend {
    Users,
    Orders,
}

impl Backend {
    fn label(self) -> &'static str {
        match self {
            Self::Users => "User Service",
            Self::Orders => "Order Service",
        }
    }

    fn base_url(self, state: &GatewayState) -> &str {
        match self {
            Self::Users => &state.user_service_url,
            Self::Orders => &state.order_service_url,
        }
    }
}

/// Returns the `/api/*` router.
pub fn router() -> Router<GatewayState> {
    Router::new()
        .route("/api/users", any(proxy_users))
        .route("/api/users/{id}", any(proxy_users))
        .route("/api/orders", any(proxy_orders))
        .route("/api/orders/{id}", any(proxy_orders))
        .route("/api/orders/{id}/with-user", any(proxy_orders))
}

async fn proxy_users(State(state): State<GatewayState>, req: Request) -> Response {
    forward(&state, Backend::Users, req).await
}

async fn proxy_orders(State(state): State<GatewayState>, req: Request) -> Response {
    forward(&state, Backend::Orders, req).await
}

async fn forward(state: &GatewayState, backend: Backend, req: Request) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().trim_start_matches("/api").to_string();
    let query = req.uri().query().map(ToString::to_string);
    let propagate = method == Method::GET && is_single_resource(&path);

    let mut url = format!("{}{path}", backend.base_url(state));
    if let Some(q) = &query {
        url.push('?');
        url.push_str(q);
    }

    let body = match axum::body::to_bytes(req.into_body(), BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to read request body for {}", backend.label()),
                Some(e.to_string()),
            );
        }
    };

    let mut upstream = state.http.request(method.clone(), &url);
    if method == Method::POST || method == Method::PUT {
        upstream = upstream
            .header(header::CONTENT_TYPE, "application/json")
            .body(body);
    }

    match upstream.send().await {
        Ok(response) => {
            let status = response.status();
            if status.is_success() {
                match response.bytes().await {
                    Ok(bytes) => passthrough(status, bytes),
                    Err(e) => error_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("failed to read {} response", backend.label()),
                        Some(e.to_string()),
                    ),
                }
            } else {
                let code = if propagate {
                    status
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                error_response(
                    code,
                    format!("{} request failed", backend.label()),
                    Some(format!("upstream responded with status {status}")),
                )
            }
        }
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to reach {}", backend.label()),
            Some(e.to_string()),
        ),
    }
}

/// True for `/users/{id}`, `/orders/{id}`, and `/orders/{id}/with-user`;
/// false for the bare collections.
fn is_single_resource(path: &str) -> bool {
    path.trim_matches('/').split('/').count() > 1
}

fn passthrough(status: StatusCode, bytes: axum::body::Bytes) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Body::from(bytes),
    )
        .into_response()
}

fn error_response(status: StatusCode, message: String, error: Option<String>) -> Response {
    (status, Json(ErrorResponse::new(message, error))).into_response()
}
