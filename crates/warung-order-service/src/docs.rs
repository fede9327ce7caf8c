//! OpenAPI document, served as JSON at `/api-docs`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::models::{NewOrder, Order, OrderStatus, UpdateOrder};
use crate::routes;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Warung Order Service",
        description = "CRUD over orders in orders.db, plus the with-user composite read"
    ),
    paths(
        routes::list_orders,
        routes::get_order,
        routes::get_order_with_user,
        routes::create_order,
        routes::update_order,
        routes::delete_order,
    ),
    components(schemas(Order, OrderStatus, NewOrder, UpdateOrder))
)]
struct ApiDoc;

async fn serve_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Returns the `/api-docs` router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api-docs", get(serve_docs))
}
