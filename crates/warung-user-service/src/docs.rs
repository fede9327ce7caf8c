//! OpenAPI document, served as JSON at `/api-docs`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::models::{NewUser, UpdateUser, User};
use crate::routes;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Warung User Service",
        description = "CRUD over customer records in users.db"
    ),
    paths(
        routes::list_users,
        routes::get_user,
        routes::create_user,
        routes::update_user,
        routes::delete_user,
    ),
    components(schemas(User, NewUser, UpdateUser))
)]
struct ApiDoc;

async fn serve_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Returns the `/api-docs` router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api-docs", get(serve_docs))
}
