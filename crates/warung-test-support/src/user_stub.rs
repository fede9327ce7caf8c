//! Recording stub for the User Service.
//!
//! Lets composite-read tests observe exactly which user ids were
//! fetched, and force failure modes without a real backend.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

/// How the stub answers `GET /users/{id}`.
#[derive(Debug, Clone, Copy)]
pub enum StubBehavior {
    /// 200 with a canned user for the requested id.
    Ok,
    /// 404 with a failure envelope.
    NotFound,
    /// 500 with a failure envelope.
    Error,
}

/// A stub User Service that records every hit.
#[derive(Debug, Clone)]
pub struct RecordingUserService {
    hits: Arc<Mutex<Vec<i64>>>,
    behavior: StubBehavior,
}

impl RecordingUserService {
    #[must_use]
    pub fn new(behavior: StubBehavior) -> Self {
        Self {
            hits: Arc::new(Mutex::new(Vec::new())),
            behavior,
        }
    }

    /// Ids requested so far, in order.
    ///
    /// # Panics
    ///
    /// Panics when the hit lock is poisoned.
    #[must_use]
    pub fn hits(&self) -> Vec<i64> {
        self.hits.lock().unwrap().clone()
    }

    /// Router answering `GET /users/{id}` per the configured behavior.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .route("/users/{id}", get(handle))
            .with_state(self.clone())
    }
}

async fn handle(
    State(stub): State<RecordingUserService>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    stub.hits.lock().unwrap().push(id);

    match stub.behavior {
        StubBehavior::Ok => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "id": id,
                    "name": "John Doe",
                    "email": "john@example.com",
                    "phone": "081234567890",
                    "address": "Jl. Sudirman No. 1, Jakarta",
                    "created_at": "2026-01-15T10:00:00"
                }
            })),
        ),
        StubBehavior::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "message": "user not found"})),
        ),
        StubBehavior::Error => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"success": false, "message": "boom"})),
        ),
    }
}
