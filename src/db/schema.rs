//! SQL DDL for all HoloMente tables.
//!
//! Defines the `memories`, `presence_state`, `companions`,
//! `companion_messages`, and `schema_meta` tables. All DDL uses
//! `IF NOT EXISTS` for idempotent initialization.

use rusqlite::Connection;

/// All schema DDL statements for HoloMente's tables.
const SCHEMA_SQL: &str = r#"
-- Journal entries
CREATE TABLE IF NOT EXISTS memories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    message TEXT NOT NULL,
    response TEXT NOT NULL,
    timestamp TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_memories_timestamp ON memories(timestamp);

-- Singleton presence row; the CHECK pins the only legal id
CREATE TABLE IF NOT EXISTS presence_state (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    name TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Companion personas
CREATE TABLE IF NOT EXISTS companions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    manifesto TEXT NOT NULL,
    history TEXT NOT NULL,
    purpose TEXT NOT NULL,
    personality TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_companions_name ON companions(name);

-- Conversation history per companion
CREATE TABLE IF NOT EXISTS companion_messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    companion_id INTEGER NOT NULL REFERENCES companions(id),
    user_message TEXT NOT NULL,
    companion_response TEXT NOT NULL,
    timestamp TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_companion_messages_companion ON companion_messages(companion_id);
CREATE INDEX IF NOT EXISTS idx_companion_messages_timestamp ON companion_messages(companion_id, timestamp);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        // Verify all tables exist
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"memories".to_string()));
        assert!(tables.contains(&"presence_state".to_string()));
        assert!(tables.contains(&"companions".to_string()));
        assert!(tables.contains(&"companion_messages".to_string()));
        assert!(tables.contains(&"schema_meta".to_string()));
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap(); // second call should not error
    }

    #[test]
    fn companion_slug_is_unique() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let insert = "INSERT INTO companions (name, slug, manifesto, history, purpose, personality, created_at)
                      VALUES ('A', 'dup', 'm', 'h', 'p', 'pe', '2025-01-01T00:00:00Z')";
        conn.execute(insert, []).unwrap();
        assert!(conn.execute(insert, []).is_err());
    }

    #[test]
    fn presence_state_rejects_second_row() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        conn.execute(
            "INSERT INTO presence_state (id, name, created_at) VALUES (1, 'LuxSilente', '2025-01-01T00:00:00Z')",
            [],
        )
        .unwrap();
        // A second id violates the CHECK constraint
        assert!(conn
            .execute(
                "INSERT INTO presence_state (id, name, created_at) VALUES (2, 'Other', '2025-01-01T00:00:00Z')",
                [],
            )
            .is_err());
    }
}
