//! Companion endpoints.
//!
//! All routes address companions by slug; the slug resolves to the row first,
//! so an unknown slug is 404 regardless of what else is wrong with the
//! request.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use super::{text_is_valid, with_store, ApiError, AppState};
use crate::store::{self, Companion, CompanionMessage};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCompanionMessageRequest {
    pub user_message: String,
}

/// GET /api/companions
pub async fn list_companions(
    State(app): State<AppState>,
) -> Result<Json<Vec<Companion>>, ApiError> {
    let companions = with_store(&app, store::companions::list_companions).await?;
    Ok(Json(companions))
}

/// GET /api/companions/{slug}
pub async fn get_companion(
    State(app): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Companion>, ApiError> {
    let companion = with_store(&app, move |conn| {
        store::companions::get_companion_by_slug(conn, &slug)
    })
    .await?
    .ok_or_else(|| ApiError::not_found("Companion"))?;

    Ok(Json(companion))
}

/// GET /api/companions/{slug}/messages
pub async fn list_messages(
    State(app): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<CompanionMessage>>, ApiError> {
    let companion = with_store(&app, move |conn| {
        store::companions::get_companion_by_slug(conn, &slug)
    })
    .await?
    .ok_or_else(|| ApiError::not_found("Companion"))?;

    let messages = with_store(&app, move |conn| {
        store::companions::list_companion_messages(conn, companion.id)
    })
    .await?;

    Ok(Json(messages))
}

/// POST /api/companions/{slug}/messages
///
/// Body: `{"userMessage": "..."}`. The slug resolves before the body is
/// examined; blank or oversize messages are rejected with 400 before anything
/// is written.
pub async fn add_message(
    State(app): State<AppState>,
    Path(slug): Path<String>,
    payload: Result<Json<AddCompanionMessageRequest>, JsonRejection>,
) -> Result<Json<CompanionMessage>, ApiError> {
    let companion = with_store(&app, move |conn| {
        store::companions::get_companion_by_slug(conn, &slug)
    })
    .await?
    .ok_or_else(|| ApiError::not_found("Companion"))?;

    let Json(req) =
        payload.map_err(|_| ApiError::bad_request("Error sending message to companion"))?;
    if !text_is_valid(&req.user_message) {
        return Err(ApiError::bad_request("Error sending message to companion"));
    }

    let message = with_store(&app, move |conn| {
        store::companions::add_companion_message(conn, companion.id, &req.user_message)
    })
    .await?;

    tracing::info!(
        companion_id = message.companion_id,
        id = message.id,
        "companion message stored"
    );
    Ok(Json(message))
}
