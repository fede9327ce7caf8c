//! REST surface rooted at `/users`.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;

use warung_core::envelope::{DataResponse, MessageResponse};
use warung_core::error::ServiceError;
use warung_core::extract::{Json, Path};

use crate::models::{NewUser, UpdateUser, User};
use crate::state::AppState;

/// Returns the `/users` router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// GET /users
#[utoipa::path(get, path = "/users", tag = "users",
    responses((status = 200, description = "All users, id ascending", body = [User])))]
pub(crate) async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<User>>>, ServiceError> {
    let users = state.repo.list().await?;
    Ok(Json(DataResponse::new(users)))
}

/// GET /users/{id}
#[utoipa::path(get, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No such user")))]
pub(crate) async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DataResponse<User>>, ServiceError> {
    let user = state
        .repo
        .find(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("user {id} not found")))?;
    Ok(Json(DataResponse::new(user)))
}

/// POST /users
#[utoipa::path(post, path = "/users", tag = "users",
    request_body = NewUser,
    responses(
        (status = 201, description = "Created user", body = User),
        (status = 400, description = "Missing required field"),
        (status = 500, description = "Store error, including duplicate email")))]
pub(crate) async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<(StatusCode, Json<DataResponse<User>>), ServiceError> {
    let user = state.repo.create(payload.into_validated()?).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(user))))
}

/// PUT /users/{id}
#[utoipa::path(put, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Post-update row", body = User),
        (status = 400, description = "No recognized field, or an empty string, supplied"),
        (status = 404, description = "No such user")))]
pub(crate) async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUser>,
) -> Result<Json<DataResponse<User>>, ServiceError> {
    let user = state
        .repo
        .update(id, payload.into_validated()?)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("user {id} not found")))?;
    Ok(Json(DataResponse::new(user)))
}

/// DELETE /users/{id}
#[utoipa::path(delete, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "No such user")))]
pub(crate) async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ServiceError> {
    if state.repo.delete(id).await? {
        Ok(Json(MessageResponse::new("User berhasil dihapus")))
    } else {
        Err(ServiceError::NotFound(format!("user {id} not found")))
    }
}
