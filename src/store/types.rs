//! Record types for the journal, the presence singleton, and companions.
//!
//! Each struct mirrors its table one to one. JSON field names are camelCase,
//! matching what the front end consumes.

use serde::{Deserialize, Serialize};

/// A journal entry, matching the `memories` table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memory {
    /// Sequential primary key.
    pub id: i64,
    /// The text the user wrote.
    pub message: String,
    /// The acknowledgment rendered at creation time.
    pub response: String,
    /// RFC 3339 creation timestamp.
    pub timestamp: String,
}

/// The presence singleton, matching the `presence_state` table schema.
///
/// At most one row ever exists; its id and creation time are fixed the first
/// time it is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceState {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

/// A companion persona, matching the `companions` table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Companion {
    pub id: i64,
    pub name: String,
    /// Stable external addressing key, unique across companions.
    pub slug: String,
    pub manifesto: String,
    pub history: String,
    pub purpose: String,
    pub personality: String,
    pub created_at: String,
}

/// One exchange with a companion, matching the `companion_messages` table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionMessage {
    pub id: i64,
    pub companion_id: i64,
    /// What the user sent, stored verbatim.
    pub user_message: String,
    /// The synthesized reply, stored at creation time.
    pub companion_response: String,
    pub timestamp: String,
}
