//! REST API — router, shared state, and the HTTP error type.
//!
//! Handlers are grouped per resource: [`presence`], [`memories`],
//! [`companions`], and [`manifesto`]. Each handler validates its input, runs
//! one or two persistence calls through [`with_store`], and serializes the
//! result as JSON.

pub mod companions;
pub mod manifesto;
pub mod memories;
pub mod presence;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use rusqlite::Connection;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::StoreError;

/// Maximum accepted length for user-provided text fields, in characters.
pub const MESSAGE_CHARS_MAX: usize = 4096;

/// Shared state: the process-wide database handle.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }
}

/// Create the API router with all routes.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/luxsilente", get(presence::get_presence))
        .route(
            "/api/memories",
            get(memories::list_memories).post(memories::add_memory),
        )
        .route("/api/memories/count", get(memories::count_memories))
        .route("/api/companions", get(companions::list_companions))
        .route("/api/companions/{slug}", get(companions::get_companion))
        .route(
            "/api/companions/{slug}/messages",
            get(companions::list_messages).post(companions::add_message),
        )
        .route("/api/manifesto/pdf", get(manifesto::get_manifesto))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run a persistence call on the blocking pool, borrowing the shared
/// connection for exactly the duration of the call. The lock is released on
/// every exit path when the guard drops.
pub(crate) async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let db = Arc::clone(&state.db);
    let result = tokio::task::spawn_blocking(move || {
        let conn = db.lock().map_err(|_| StoreError::LockPoisoned)?;
        op(&conn)
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "blocking task failed");
        ApiError::internal("internal storage error")
    })?;

    result.map_err(ApiError::from)
}

/// Validate a user-provided text field: non-empty after trimming and within
/// the length bound.
pub(crate) fn text_is_valid(text: &str) -> bool {
    !text.trim().is_empty() && text.chars().count() <= MESSAGE_CHARS_MAX
}

/// JSON error body: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// API error type that converts to HTTP responses.
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                message: message.into(),
            },
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorBody {
                message: format!("{resource} not found"),
            },
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorBody {
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { resource, .. } => ApiError::not_found(resource),
            other => {
                // Detail stays in the server log; the body is opaque
                tracing::error!(error = %other, "store operation failed");
                ApiError::internal("internal storage error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_validation_rejects_blank_and_oversize() {
        assert!(text_is_valid("hola"));
        assert!(text_is_valid(&"x".repeat(MESSAGE_CHARS_MAX)));

        assert!(!text_is_valid(""));
        assert!(!text_is_valid("   \t\n"));
        assert!(!text_is_valid(&"x".repeat(MESSAGE_CHARS_MAX + 1)));
    }

    #[test]
    fn text_validation_counts_chars_not_bytes() {
        // Multibyte characters must not trip the bound early
        assert!(text_is_valid(&"ñ".repeat(MESSAGE_CHARS_MAX)));
    }

    #[test]
    fn not_found_maps_to_404_with_resource_message() {
        let err = ApiError::from(StoreError::NotFound {
            resource: "Companion",
            key: "42".into(),
        });
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.body.message, "Companion not found");
    }

    #[test]
    fn db_errors_map_to_opaque_500() {
        let err = ApiError::from(StoreError::Db(rusqlite::Error::InvalidQuery));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.message, "internal storage error");
    }
}
