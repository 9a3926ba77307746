//! Wire protocol: JSON messages tagged with a kebab-case `event` name and
//! carrying a structured `data` payload, plus the dispatch that maps an
//! inbound event from one connection to its handler.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::call::presence::PresenceEntry;
use crate::call::rooms::Room;
use crate::call::{self, group, relay};
use crate::state::AppState;
use crate::ws::ConnectionId;

/// Inbound client events. SDP bodies and ICE candidates are opaque
/// `Value`s — the relay forwards them unchanged. Target connection ids
/// are supplied by the client and never validated server-side.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    #[serde(rename_all = "camelCase")]
    RegisterUser { username: String, peer_id: String },
    #[serde(rename_all = "camelCase")]
    PreOffer {
        callee_connection_id: ConnectionId,
        caller_username: String,
    },
    #[serde(rename_all = "camelCase")]
    PreOfferAnswer {
        caller_connection_id: ConnectionId,
        answer: Value,
    },
    #[serde(rename_all = "camelCase")]
    Offer {
        callee_connection_id: ConnectionId,
        offer: Value,
    },
    #[serde(rename_all = "camelCase")]
    Answer {
        caller_connection_id: ConnectionId,
        answer: Value,
    },
    #[serde(rename_all = "camelCase")]
    Candidate {
        connected_user_connection_id: ConnectionId,
        candidate: Value,
    },
    #[serde(rename_all = "camelCase")]
    HangUp {
        connected_user_connection_id: ConnectionId,
    },
    #[serde(rename_all = "camelCase")]
    CreateGroupRoom { peer_id: String, username: String },
    #[serde(rename_all = "camelCase")]
    JoinGroupRoom {
        room_id: String,
        peer_id: String,
        stream_id: String,
    },
    #[serde(rename_all = "camelCase")]
    LeaveGroupRoom { room_id: String, stream_id: String },
    #[serde(rename_all = "camelCase")]
    CloseGroupRoomByHost { peer_id: String },
}

/// Outbound server events.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    #[serde(rename_all = "camelCase")]
    ConnectionAck { connection_id: ConnectionId },
    #[serde(rename_all = "camelCase")]
    PreOffer {
        caller_connection_id: ConnectionId,
        caller_username: String,
    },
    PreOfferAnswer { answer: Value },
    Offer { offer: Value },
    Answer { answer: Value },
    Candidate { candidate: Value },
    HangUp,
    Broadcast(BroadcastPayload),
    #[serde(rename_all = "camelCase")]
    GroupJoinRequest { peer_id: String, stream_id: String },
    #[serde(rename_all = "camelCase")]
    GroupUserLeft { stream_id: String },
}

/// Full directory snapshot pushed to every live connection on mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "entries", rename_all = "kebab-case")]
pub enum BroadcastPayload {
    ActiveUsers(Vec<PresenceEntry>),
    GroupRooms(Vec<Room>),
}

/// Handle one incoming text frame: decode the event and dispatch.
/// Undecodable frames are logged and dropped; the connection stays up.
pub fn handle_text_message(text: &str, state: &AppState, connection_id: &ConnectionId) {
    let event: ClientEvent = match serde_json::from_str(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(
                connection_id = %connection_id,
                error = %e,
                "Failed to decode client event"
            );
            return;
        }
    };

    dispatch_event(event, state, connection_id);
}

/// Dispatch a decoded event to the appropriate handler.
fn dispatch_event(event: ClientEvent, state: &AppState, connection_id: &ConnectionId) {
    match event {
        ClientEvent::RegisterUser { username, peer_id } => {
            tracing::info!(connection_id = %connection_id, username = %username, "User registered");
            state.presence.register(PresenceEntry {
                username,
                peer_id,
                connection_id: connection_id.clone(),
            });
            // A fresh client needs both snapshots, and everyone else needs
            // the updated user list.
            call::broadcast_active_users(state);
            call::broadcast_group_rooms(state);
        }
        ClientEvent::PreOffer {
            callee_connection_id,
            caller_username,
        } => relay::pre_offer(state, connection_id, &callee_connection_id, caller_username),
        ClientEvent::PreOfferAnswer {
            caller_connection_id,
            answer,
        } => relay::pre_offer_answer(state, &caller_connection_id, answer),
        ClientEvent::Offer {
            callee_connection_id,
            offer,
        } => relay::offer(state, &callee_connection_id, offer),
        ClientEvent::Answer {
            caller_connection_id,
            answer,
        } => relay::answer(state, &caller_connection_id, answer),
        ClientEvent::Candidate {
            connected_user_connection_id,
            candidate,
        } => relay::candidate(state, &connected_user_connection_id, candidate),
        ClientEvent::HangUp {
            connected_user_connection_id,
        } => relay::hang_up(state, &connected_user_connection_id),
        ClientEvent::CreateGroupRoom { peer_id, username } => {
            group::create_room(state, connection_id, &peer_id, &username);
        }
        ClientEvent::JoinGroupRoom {
            room_id,
            peer_id,
            stream_id,
        } => group::join_room(state, connection_id, &room_id, peer_id, stream_id),
        ClientEvent::LeaveGroupRoom { room_id, stream_id } => {
            group::leave_room(state, connection_id, &room_id, stream_id);
        }
        ClientEvent::CloseGroupRoomByHost { peer_id } => {
            group::close_room_by_host(state, &peer_id);
        }
    }
}
