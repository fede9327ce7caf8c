//! REST surface rooted at `/orders`.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use serde::Deserialize;

use warung_core::envelope::{DataResponse, MessageResponse};
use warung_core::error::ServiceError;
use warung_core::extract::{Json, Path, Query};

use crate::models::{NewOrder, Order, OrderRow, UpdateOrder};
use crate::state::AppState;

/// Returns the `/orders` router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/orders/{id}/with-user", get(get_order_with_user))
}

/// Query parameters for `GET /orders`.
#[derive(Debug, Deserialize)]
pub(crate) struct ListOrdersQuery {
    /// Equality filter on the owning user.
    #[serde(rename = "userId")]
    user_id: Option<i64>,
}

/// GET /orders
#[utoipa::path(get, path = "/orders", tag = "orders",
    params(("userId" = Option<i64>, Query, description = "Filter by owning user")),
    responses((status = 200, description = "All orders, id descending", body = [Order])))]
pub(crate) async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<DataResponse<Vec<Order>>>, ServiceError> {
    let rows = state.repo.list(query.user_id).await?;
    let orders = rows
        .into_iter()
        .map(OrderRow::into_order)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(DataResponse::new(orders)))
}

/// GET /orders/{id}
#[utoipa::path(get, path = "/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order", body = Order),
        (status = 404, description = "No such order")))]
pub(crate) async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DataResponse<Order>>, ServiceError> {
    let row = state
        .repo
        .find(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("order {id} not found")))?;
    Ok(Json(DataResponse::new(row.into_order()?)))
}

/// GET /orders/{id}/with-user
///
/// Strictly two stages: the local read first (an absent order returns
/// 404 with no outbound call), then the synchronous user fetch whose
/// `data` object is merged in as `userDetails`.
#[utoipa::path(get, path = "/orders/{id}/with-user", tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order plus live userDetails"),
        (status = 404, description = "No such order"),
        (status = 500, description = "User Service call failed")))]
pub(crate) async fn get_order_with_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DataResponse<serde_json::Value>>, ServiceError> {
    let row = state
        .repo
        .find(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("order {id} not found")))?;

    let user = state.users.fetch_user(row.user_id).await?;

    let mut merged = serde_json::to_value(row.into_order()?)
        .map_err(|e| ServiceError::Internal(e.to_string()))?;
    merged["userDetails"] = user;
    Ok(Json(DataResponse::new(merged)))
}

/// POST /orders
#[utoipa::path(post, path = "/orders", tag = "orders",
    request_body = NewOrder,
    responses(
        (status = 201, description = "Created order, always pending", body = Order),
        (status = 400, description = "Missing required field")))]
pub(crate) async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<NewOrder>,
) -> Result<(StatusCode, Json<DataResponse<Order>>), ServiceError> {
    let row = state.repo.create(payload.into_validated()?).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(row.into_order()?))))
}

/// PUT /orders/{id}
#[utoipa::path(put, path = "/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    request_body = UpdateOrder,
    responses(
        (status = 200, description = "Post-update row", body = Order),
        (status = 400, description = "No recognized field, invalid status, or empty restaurant name"),
        (status = 404, description = "No such order")))]
pub(crate) async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrder>,
) -> Result<Json<DataResponse<Order>>, ServiceError> {
    let update = payload.into_validated()?;
    let row = state
        .repo
        .update(id, update)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("order {id} not found")))?;
    Ok(Json(DataResponse::new(row.into_order()?)))
}

/// DELETE /orders/{id}
#[utoipa::path(delete, path = "/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "No such order")))]
pub(crate) async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ServiceError> {
    if state.repo.delete(id).await? {
        Ok(Json(MessageResponse::new("Order berhasil dihapus")))
    } else {
        Err(ServiceError::NotFound(format!("order {id} not found")))
    }
}
