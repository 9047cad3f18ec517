//! Companion personas and their conversation history.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::types::{Companion, CompanionMessage};
use super::StoreError;
use crate::reply;

fn companion_from_row(row: &Row<'_>) -> rusqlite::Result<Companion> {
    Ok(Companion {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        manifesto: row.get(3)?,
        history: row.get(4)?,
        purpose: row.get(5)?,
        personality: row.get(6)?,
        created_at: row.get(7)?,
    })
}

/// All companions, ordered by name.
pub fn list_companions(conn: &Connection) -> Result<Vec<Companion>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, slug, manifesto, history, purpose, personality, created_at
         FROM companions ORDER BY name ASC",
    )?;
    let companions = stmt
        .query_map([], companion_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(companions)
}

/// Look up a companion by its slug. Absent is `None`, not an error.
pub fn get_companion_by_slug(
    conn: &Connection,
    slug: &str,
) -> Result<Option<Companion>, StoreError> {
    let companion = conn
        .query_row(
            "SELECT id, name, slug, manifesto, history, purpose, personality, created_at
             FROM companions WHERE slug = ?1",
            params![slug],
            companion_from_row,
        )
        .optional()?;
    Ok(companion)
}

fn get_companion_by_id(conn: &Connection, id: i64) -> Result<Option<Companion>, StoreError> {
    let companion = conn
        .query_row(
            "SELECT id, name, slug, manifesto, history, purpose, personality, created_at
             FROM companions WHERE id = ?1",
            params![id],
            companion_from_row,
        )
        .optional()?;
    Ok(companion)
}

/// Record an exchange with a companion. The reply is synthesized from the
/// companion's slug and the verbatim user message, then stored with the
/// exchange.
pub fn add_companion_message(
    conn: &Connection,
    companion_id: i64,
    user_message: &str,
) -> Result<CompanionMessage, StoreError> {
    let companion =
        get_companion_by_id(conn, companion_id)?.ok_or_else(|| StoreError::NotFound {
            resource: "Companion",
            key: companion_id.to_string(),
        })?;

    let response = reply::synthesize(&companion.slug, &companion.name, user_message);
    let now = Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO companion_messages (companion_id, user_message, companion_response, timestamp)
         VALUES (?1, ?2, ?3, ?4)",
        params![companion_id, user_message, response, now],
    )?;

    Ok(CompanionMessage {
        id: conn.last_insert_rowid(),
        companion_id,
        user_message: user_message.to_string(),
        companion_response: response,
        timestamp: now,
    })
}

/// A companion's messages, newest first. Messages sharing a timestamp fall
/// back to insertion order, latest insert first.
pub fn list_companion_messages(
    conn: &Connection,
    companion_id: i64,
) -> Result<Vec<CompanionMessage>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, companion_id, user_message, companion_response, timestamp
         FROM companion_messages WHERE companion_id = ?1 ORDER BY timestamp DESC, id DESC",
    )?;
    let messages = stmt
        .query_map(params![companion_id], |row| {
            Ok(CompanionMessage {
                id: row.get(0)?,
                companion_id: row.get(1)?,
                user_message: row.get(2)?,
                companion_response: row.get(3)?,
                timestamp: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(messages)
}
