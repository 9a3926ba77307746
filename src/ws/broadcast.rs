use super::ConnectionRegistry;
use crate::ws::protocol::ServerEvent;

/// Broadcast an event to every live connection.
/// Serialized once, fanned out to each writer channel.
pub fn broadcast_to_all(registry: &ConnectionRegistry, event: &ServerEvent) {
    let text = match serde_json::to_string(event) {
        Ok(text) => text,
        Err(_) => return,
    };
    let msg = axum::extract::ws::Message::Text(text.into());

    for entry in registry.iter() {
        let _ = entry.value().send(msg.clone());
    }
}

/// Send an event to a single connection.
/// Silently dropped when the target is no longer live — expected under
/// races between teardown and in-flight messages.
pub fn send_to(registry: &ConnectionRegistry, connection_id: &str, event: &ServerEvent) {
    let text = match serde_json::to_string(event) {
        Ok(text) => text,
        Err(_) => return,
    };

    if let Some(sender) = registry.get(connection_id) {
        let _ = sender.send(axum::extract::ws::Message::Text(text.into()));
    }
}
