//! Call state and signaling handlers: presence, group rooms, one-to-one
//! relay, and the snapshot broadcasts tied to directory mutations.

pub mod group;
pub mod presence;
pub mod relay;
pub mod rooms;

use crate::state::AppState;
use crate::ws::broadcast::broadcast_to_all;
use crate::ws::protocol::{BroadcastPayload, ServerEvent};

/// Push the current active-users snapshot to every live connection.
/// Unconditional and global — no diffing or per-recipient filtering.
pub fn broadcast_active_users(state: &AppState) {
    let event = ServerEvent::Broadcast(BroadcastPayload::ActiveUsers(state.presence.snapshot()));
    broadcast_to_all(&state.connections, &event);
}

/// Push the current group-rooms snapshot to every live connection.
pub fn broadcast_group_rooms(state: &AppState) {
    let event = ServerEvent::Broadcast(BroadcastPayload::GroupRooms(state.rooms.snapshot()));
    broadcast_to_all(&state.connections, &event);
}
