//! The presence singleton.

use chrono::Utc;
use rusqlite::{params, Connection};

use super::types::PresenceState;
use super::StoreError;

/// Name given to the presence row created on first read.
pub const DEFAULT_PRESENCE_NAME: &str = "LuxSilente";

/// Fetch the presence singleton, creating it on first call.
///
/// The conditional insert against the fixed primary key makes concurrent
/// first calls converge on a single row; `id` and `created_at` never change
/// afterwards.
pub fn get_state(conn: &Connection) -> Result<PresenceState, StoreError> {
    conn.execute(
        "INSERT OR IGNORE INTO presence_state (id, name, created_at) VALUES (1, ?1, ?2)",
        params![DEFAULT_PRESENCE_NAME, Utc::now().to_rfc3339()],
    )?;

    let state = conn.query_row(
        "SELECT id, name, created_at FROM presence_state WHERE id = 1",
        [],
        |row| {
            Ok(PresenceState {
                id: row.get(0)?,
                name: row.get(1)?,
                created_at: row.get(2)?,
            })
        },
    )?;

    Ok(state)
}
