//! Room directory and room-scoped subscription lists.
//!
//! A room is a host-owned group-call session. The directory is the
//! insertion-ordered list broadcast to clients; the topic registry holds
//! which connections receive room-scoped forwards (join requests, leave
//! notices). The two are deliberately separate: closing a room removes
//! the directory entry but does not evict joined subscribers.

use dashmap::DashMap;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::ws::ConnectionId;

/// One active group-call room as it appears in group-rooms broadcasts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Generated identifier, unique among active rooms.
    pub room_id: String,
    /// Host's media peer id.
    pub peer_id: String,
    /// Host's display name.
    pub host_name: String,
    /// Connection that created the room; the room dies with it.
    pub connection_id: ConnectionId,
}

/// Insertion-ordered directory of active rooms.
#[derive(Debug, Default)]
pub struct RoomDirectory {
    rooms: Mutex<Vec<Room>>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a room hosted by `connection_id` and return its generated id.
    /// Room ids are 128-bit random, so collisions with active rooms are
    /// negligible. A host creating a second room gets a second entry.
    pub fn create(&self, connection_id: &str, peer_id: &str, host_name: &str) -> String {
        let room_id = Uuid::new_v4().to_string();
        self.lock().push(Room {
            room_id: room_id.clone(),
            peer_id: peer_id.to_string(),
            host_name: host_name.to_string(),
            connection_id: connection_id.to_string(),
        });
        room_id
    }

    /// Remove every room whose host media peer id matches.
    pub fn close_by_host(&self, peer_id: &str) {
        self.lock().retain(|r| r.peer_id != peer_id);
    }

    /// Remove every room hosted by the given connection.
    /// Called from connection teardown.
    pub fn remove_by_connection(&self, connection_id: &str) {
        self.lock().retain(|r| r.connection_id != connection_id);
    }

    /// Current rooms in creation order, for broadcast payloads.
    pub fn snapshot(&self) -> Vec<Room> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Room>> {
        self.rooms.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Room-scoped subscription lists used for group-call forwards.
///
/// Keyed by room id; members are connection ids. Subscribing to an id
/// that was never created just creates the topic, and forwarding to a
/// topic nobody subscribed is a silent no-op — the directory is never
/// consulted.
#[derive(Debug, Default)]
pub struct TopicRegistry {
    topics: DashMap<String, Vec<ConnectionId>>,
}

impl TopicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection to a topic. Subscribing twice is a no-op.
    pub fn subscribe(&self, room_id: &str, connection_id: &str) {
        let mut members = self.topics.entry(room_id.to_string()).or_default();
        if !members.iter().any(|m| m == connection_id) {
            members.push(connection_id.to_string());
        }
    }

    /// Remove a connection from a topic, dropping the topic when empty.
    pub fn unsubscribe(&self, room_id: &str, connection_id: &str) {
        if let Some(mut members) = self.topics.get_mut(room_id) {
            members.retain(|m| m != connection_id);
        }
        // The emptiness check must stay atomic with the removal: a
        // subscriber arriving between a released guard and a plain
        // remove() would be deleted along with the topic.
        self.topics.remove_if(room_id, |_, members| members.is_empty());
    }

    /// Current members of a topic; empty when the topic does not exist.
    pub fn members(&self, room_id: &str) -> Vec<ConnectionId> {
        self.topics
            .get(room_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Drop a closing connection from every topic it joined.
    ///
    /// Collect topic ids first to avoid holding a shard lock while
    /// removing emptied topics.
    pub fn unsubscribe_all(&self, connection_id: &str) {
        let room_ids: Vec<String> = self.topics.iter().map(|e| e.key().clone()).collect();
        for room_id in room_ids {
            self.unsubscribe(&room_id, connection_id);
        }
    }
}
