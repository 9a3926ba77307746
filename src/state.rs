use std::sync::Arc;

use crate::call::presence::PresenceDirectory;
use crate::call::rooms::{RoomDirectory, TopicRegistry};
use crate::config::TurnConfig;
use crate::ws::ConnectionRegistry;

/// Shared application state passed to all handlers via axum State extractor.
/// Everything here is in-memory and lost on restart.
#[derive(Clone)]
pub struct AppState {
    /// Active WebSocket connections by connection id
    pub connections: ConnectionRegistry,
    /// Registered users, insertion-ordered
    pub presence: Arc<PresenceDirectory>,
    /// Active group-call rooms, insertion-ordered
    pub rooms: Arc<RoomDirectory>,
    /// Room-scoped subscription lists for group forwards
    pub topics: Arc<TopicRegistry>,
    /// HTTP client for the external credential-issuance service
    pub http: reqwest::Client,
    /// TURN credential proxy config ([turn] section); None disables the proxy
    pub turn: Option<TurnConfig>,
}

impl AppState {
    pub fn new(turn: Option<TurnConfig>) -> Self {
        Self {
            connections: crate::ws::new_connection_registry(),
            presence: Arc::new(PresenceDirectory::new()),
            rooms: Arc::new(RoomDirectory::new()),
            topics: Arc::new(TopicRegistry::new()),
            http: reqwest::Client::new(),
            turn,
        }
    }
}
