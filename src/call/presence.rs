//! Presence directory: insertion-ordered list of registered users.
//!
//! Derived entirely from connection lifecycle events — an entry appears
//! on an explicit register and disappears when its connection closes.
//! Nothing here is persisted.

use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

use crate::ws::ConnectionId;

/// One registered user as it appears in active-users broadcasts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceEntry {
    /// Display name chosen by the user.
    pub username: String,
    /// Identifier the media-negotiation helper uses to address this client.
    pub peer_id: String,
    /// Connection that registered this entry.
    pub connection_id: ConnectionId,
}

/// Insertion-ordered directory of registered users.
///
/// All operations are read-modify-write over the shared sequence, so the
/// whole directory sits behind a single mutex. Critical sections are a
/// push or a retain; nothing blocks while holding the lock.
#[derive(Debug, Default)]
pub struct PresenceDirectory {
    entries: Mutex<Vec<PresenceEntry>>,
}

impl PresenceDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry. A connection that registers twice gets two
    /// entries — duplicates are intentionally not collapsed, matching the
    /// wire behavior clients already rely on. Callers broadcast the
    /// snapshot afterwards.
    pub fn register(&self, entry: PresenceEntry) {
        self.lock().push(entry);
    }

    /// Remove every entry registered by the given connection.
    /// Called from connection teardown.
    pub fn remove_by_connection(&self, connection_id: &str) {
        self.lock().retain(|e| e.connection_id != connection_id);
    }

    /// Current entries in registration order, for broadcast payloads.
    pub fn snapshot(&self) -> Vec<PresenceEntry> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<PresenceEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
