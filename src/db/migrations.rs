//! Forward-only schema migrations.
//!
//! The database records its schema version in `schema_meta`;
//! [`run_migrations`] walks it forward one version at a time until it
//! matches [`CURRENT_SCHEMA_VERSION`].

use rusqlite::Connection;

/// Schema version this binary writes and expects.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// Read the schema version recorded in `schema_meta`.
pub fn schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    let raw: String = conn.query_row(
        "SELECT value FROM schema_meta WHERE key = 'schema_version'",
        [],
        |row| row.get(0),
    )?;
    Ok(raw.parse().unwrap_or(0))
}

fn record_version(conn: &Connection, version: u32) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE schema_meta SET value = ?1 WHERE key = 'schema_version'",
        [version.to_string()],
    )?;
    Ok(())
}

/// Apply every migration between the recorded version and the current one.
pub fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
    let recorded = schema_version(conn)?;
    tracing::debug!(recorded, expected = CURRENT_SCHEMA_VERSION, "schema version check");

    for next in (recorded + 1)..=CURRENT_SCHEMA_VERSION {
        tracing::info!(to = next, "applying schema migration");
        match next {
            2 => add_listing_indexes(conn)?,
            unknown => {
                tracing::error!(version = unknown, "no migration registered");
                break;
            }
        }
        record_version(conn, next)?;
    }

    Ok(())
}

/// v2: indexes backing the newest-first listing queries. Databases created
/// before the descending order landed have none.
fn add_listing_indexes(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_memories_timestamp ON memories(timestamp);
         CREATE INDEX IF NOT EXISTS idx_companion_messages_timestamp ON companion_messages(companion_id, timestamp);",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "foreign_keys", "ON").unwrap();
        crate::db::schema::init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn fresh_database_starts_at_version_1() {
        let conn = bare_db();
        assert_eq!(schema_version(&conn).unwrap(), 1);
    }

    #[test]
    fn migrations_reach_current_version() {
        let conn = bare_db();
        run_migrations(&conn).unwrap();
        assert_eq!(schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn v2_adds_listing_indexes() {
        let conn = bare_db();
        run_migrations(&conn).unwrap();

        let indexes: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'index'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert!(indexes.contains(&"idx_memories_timestamp".to_string()));
        assert!(indexes.contains(&"idx_companion_messages_timestamp".to_string()));
    }

    #[test]
    fn rerunning_migrations_is_harmless() {
        let conn = bare_db();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
    }
}
