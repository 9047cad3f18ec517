#![allow(dead_code)]

use axum::Router;
use holomente::api::{self, AppState};
use holomente::db;
use rusqlite::Connection;

/// Open a fresh in-memory database with schema, migrations, and the built-in
/// companions applied.
pub fn test_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.pragma_update(None, "foreign_keys", "ON").unwrap();
    db::schema::init_schema(&conn).unwrap();
    db::migrations::run_migrations(&conn).unwrap();
    db::seed::seed_companions(&conn).unwrap();
    conn
}

/// Build the full API router over a fresh seeded in-memory database.
pub fn test_app() -> Router {
    api::router(AppState::new(test_db()))
}
