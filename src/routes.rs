use axum::{routing::get, Json, Router};
use tower_http::cors::CorsLayer;

use crate::state::AppState;
use crate::turn;
use crate::ws::handler as ws_handler;

/// GET / — Static identifying payload so clients (and load balancers) can
/// confirm they reached the signaling API.
async fn api_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "api": "switchboard" }))
}

/// Basic health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

/// Build the full axum Router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health_check))
        .route("/api/get-turn-credentials", get(turn::get_turn_credentials))
        .route("/ws", get(ws_handler::ws_upgrade))
        // Browser clients are served from arbitrary origins
        .layer(CorsLayer::permissive())
        .with_state(state)
}
