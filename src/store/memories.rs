//! Journal entries — the memory timeline.

use chrono::Utc;
use rusqlite::{params, Connection};

use super::state;
use super::types::Memory;
use super::StoreError;

/// Store a journal entry. The acknowledgment is rendered from the presence
/// name (bootstrapping the singleton if needed) and saved with the entry.
pub fn add_memory(conn: &Connection, message: &str) -> Result<Memory, StoreError> {
    let presence = state::get_state(conn)?;
    let response = format!("[{}] Te escucho: '{}' 🌬️", presence.name, message);
    let now = Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO memories (message, response, timestamp) VALUES (?1, ?2, ?3)",
        params![message, response, now],
    )?;

    Ok(Memory {
        id: conn.last_insert_rowid(),
        message: message.to_string(),
        response,
        timestamp: now,
    })
}

/// All journal entries, newest first. Entries sharing a timestamp fall back
/// to insertion order, latest insert first.
pub fn list_memories(conn: &Connection) -> Result<Vec<Memory>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, message, response, timestamp FROM memories ORDER BY timestamp DESC, id DESC",
    )?;
    let entries = stmt
        .query_map([], |row| {
            Ok(Memory {
                id: row.get(0)?,
                message: row.get(1)?,
                response: row.get(2)?,
                timestamp: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

/// Number of journal entries stored.
pub fn count_memories(conn: &Connection) -> Result<u64, StoreError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM memories", [], |row| row.get(0))?;
    Ok(count as u64)
}
