//! HoloMente — REST backend for the HoloMundo memory journal and its digital
//! companions.
//!
//! HoloMente persists two kinds of conversation: "memories" (journal entries
//! sent to the resident presence, LuxSilente, each answered with a fixed
//! acknowledgment) and per-companion message threads, where every reply is a
//! deterministic template keyed on the companion's slug. There is no model
//! inference anywhere — companion replies are canned text with the user's
//! message embedded verbatim.
//!
//! # Architecture
//!
//! - **Storage**: SQLite (bundled, WAL mode) with plain relational tables —
//!   `memories`, `presence_state`, `companions`, `companion_messages`
//! - **API**: axum JSON routes under `/api`, one persistence call per handler
//! - **Replies**: a const registry mapping companion slugs to reply templates
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite initialization, schema, migrations, and companion seeding
//! - [`store`] — Persistence gateway: typed reads and writes over the tables
//! - [`reply`] — The slug-keyed companion reply synthesizer
//! - [`api`] — HTTP route handlers and error mapping
//! - [`server`] — Server startup and graceful shutdown

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod reply;
pub mod server;
pub mod store;
