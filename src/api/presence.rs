//! The presence endpoint.

use axum::extract::State;
use axum::Json;

use super::{with_store, ApiError, AppState};
use crate::store::{self, PresenceState};

/// GET /api/luxsilente
///
/// Returns the presence singleton, creating it on the first call ever made
/// against this database.
pub async fn get_presence(State(app): State<AppState>) -> Result<Json<PresenceState>, ApiError> {
    let presence = with_store(&app, store::state::get_state).await?;
    Ok(Json(presence))
}
