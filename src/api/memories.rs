//! Journal endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{text_is_valid, with_store, ApiError, AppState};
use crate::store::{self, Memory};

#[derive(Debug, Deserialize)]
pub struct AddMemoryRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MemoryCount {
    pub count: u64,
}

/// GET /api/memories
pub async fn list_memories(State(app): State<AppState>) -> Result<Json<Vec<Memory>>, ApiError> {
    let entries = with_store(&app, store::memories::list_memories).await?;
    Ok(Json(entries))
}

/// POST /api/memories
///
/// Body: `{"message": "..."}`. Malformed bodies and blank or oversize
/// messages are rejected with 400 before anything is written.
pub async fn add_memory(
    State(app): State<AppState>,
    payload: Result<Json<AddMemoryRequest>, JsonRejection>,
) -> Result<Json<Memory>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::bad_request("Error adding memory"))?;
    if !text_is_valid(&req.message) {
        return Err(ApiError::bad_request("Error adding memory"));
    }

    let memory =
        with_store(&app, move |conn| store::memories::add_memory(conn, &req.message)).await?;

    tracing::info!(id = memory.id, chars = memory.message.chars().count(), "memory stored");
    Ok(Json(memory))
}

/// GET /api/memories/count
pub async fn count_memories(State(app): State<AppState>) -> Result<Json<MemoryCount>, ApiError> {
    let count = with_store(&app, store::memories::count_memories).await?;
    Ok(Json(MemoryCount { count }))
}
