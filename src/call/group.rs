//! Group-call room handlers: create/join/leave/close plus the room-scoped
//! forwards that reach current topic subscribers.

use crate::call;
use crate::state::AppState;
use crate::ws::broadcast::send_to;
use crate::ws::protocol::ServerEvent;
use crate::ws::ConnectionId;

/// Create a room hosted by this connection, subscribe the host to the
/// room topic, and broadcast the updated room list. The creator learns
/// the generated room id from that broadcast.
pub fn create_room(
    state: &AppState,
    connection_id: &ConnectionId,
    peer_id: &str,
    username: &str,
) -> String {
    let room_id = state.rooms.create(connection_id, peer_id, username);
    state.topics.subscribe(&room_id, connection_id);

    tracing::info!(
        connection_id = %connection_id,
        room_id = %room_id,
        "Group room created"
    );

    call::broadcast_group_rooms(state);
    room_id
}

/// Forward a join request to current subscribers, then subscribe the
/// joiner. Forwarding happens first so the joiner never receives its own
/// request. The room id is not validated against the directory — an
/// unknown topic makes the forward a silent no-op.
pub fn join_room(
    state: &AppState,
    connection_id: &ConnectionId,
    room_id: &str,
    peer_id: String,
    stream_id: String,
) {
    let event = ServerEvent::GroupJoinRequest { peer_id, stream_id };
    for member in state.topics.members(room_id) {
        send_to(&state.connections, &member, &event);
    }

    state.topics.subscribe(room_id, connection_id);
}

/// Unsubscribe the leaver, then notify remaining subscribers which stream
/// disappeared.
pub fn leave_room(
    state: &AppState,
    connection_id: &ConnectionId,
    room_id: &str,
    stream_id: String,
) {
    state.topics.unsubscribe(room_id, connection_id);

    let event = ServerEvent::GroupUserLeft { stream_id };
    for member in state.topics.members(room_id) {
        send_to(&state.connections, &member, &event);
    }
}

/// Remove every room hosted by this media peer id and broadcast the
/// updated list. Joined participants keep their topic subscription and
/// get no eviction notice; only the directory entry goes away.
pub fn close_room_by_host(state: &AppState, peer_id: &str) {
    state.rooms.close_by_host(peer_id);
    call::broadcast_group_rooms(state);
}
