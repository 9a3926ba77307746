//! One-to-one signaling relay.
//!
//! Each handler forwards a single payload to a target connection id taken
//! verbatim from the client message — trust is client-asserted, there is
//! no session binding. A stale target means the message vanishes; the
//! sender is not notified. No directory state is touched here.

use serde_json::Value;

use crate::state::AppState;
use crate::ws::broadcast::send_to;
use crate::ws::protocol::ServerEvent;
use crate::ws::ConnectionId;

/// Ring the callee: tell it who is calling and which connection to answer.
pub fn pre_offer(
    state: &AppState,
    sender_id: &ConnectionId,
    callee_connection_id: &str,
    caller_username: String,
) {
    send_to(
        &state.connections,
        callee_connection_id,
        &ServerEvent::PreOffer {
            caller_connection_id: sender_id.clone(),
            caller_username,
        },
    );
}

/// Relay the callee's accept/reject decision back to the caller.
pub fn pre_offer_answer(state: &AppState, caller_connection_id: &str, answer: Value) {
    send_to(
        &state.connections,
        caller_connection_id,
        &ServerEvent::PreOfferAnswer { answer },
    );
}

/// Relay an SDP offer to the callee.
pub fn offer(state: &AppState, callee_connection_id: &str, offer: Value) {
    send_to(
        &state.connections,
        callee_connection_id,
        &ServerEvent::Offer { offer },
    );
}

/// Relay an SDP answer to the caller.
pub fn answer(state: &AppState, caller_connection_id: &str, answer: Value) {
    send_to(
        &state.connections,
        caller_connection_id,
        &ServerEvent::Answer { answer },
    );
}

/// Relay an ICE candidate to the connected peer.
pub fn candidate(state: &AppState, target_connection_id: &str, candidate: Value) {
    send_to(
        &state.connections,
        target_connection_id,
        &ServerEvent::Candidate { candidate },
    );
}

/// Tell the connected peer the call ended. Carries no payload.
pub fn hang_up(state: &AppState, target_connection_id: &str) {
    send_to(&state.connections, target_connection_id, &ServerEvent::HangUp);
}
