//! Persistence gateway — every read and write against the HoloMente database.
//!
//! Organized per entity: [`state`] owns the presence singleton, [`memories`]
//! the journal entries, and [`companions`] the personas and their
//! conversations. All operations borrow a [`rusqlite::Connection`] and return
//! [`StoreError`] on failure; callers are expected to have validated input
//! text before writing.

pub mod companions;
pub mod memories;
pub mod state;
pub mod types;

use thiserror::Error;

pub use types::{Companion, CompanionMessage, Memory, PresenceState};

/// Errors from persistence gateway operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A referenced row does not exist.
    #[error("{resource} not found: {key}")]
    NotFound {
        resource: &'static str,
        key: String,
    },

    /// Any underlying SQLite failure.
    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// The shared connection lock was poisoned by a panicking holder.
    #[error("connection lock poisoned")]
    LockPoisoned,
}
