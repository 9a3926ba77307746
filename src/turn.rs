//! Proxy to the external TURN credential-issuance service.
//!
//! Credential issuance is an opaque external call: the relay forwards one
//! token-create request and hands the upstream JSON back verbatim. No
//! retry, no caching; upstream failure surfaces as an HTTP-level failure
//! to the caller.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::state::AppState;

/// GET /api/get-turn-credentials
/// Returns `{"token": <upstream response>}`.
/// 503 when no [turn] section is configured, 502 on upstream failure.
pub async fn get_turn_credentials(
    State(state): State<AppState>,
) -> Result<Json<Value>, StatusCode> {
    let turn = state.turn.as_ref().ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let response = state
        .http
        .post(turn.token_url())
        .basic_auth(&turn.account_sid, Some(&turn.auth_token))
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "TURN credential request failed");
            StatusCode::BAD_GATEWAY
        })?;

    if !response.status().is_success() {
        tracing::warn!(
            status = %response.status(),
            "TURN credential service returned an error"
        );
        return Err(StatusCode::BAD_GATEWAY);
    }

    let token: Value = response.json().await.map_err(|e| {
        tracing::warn!(error = %e, "TURN credential response was not JSON");
        StatusCode::BAD_GATEWAY
    })?;

    Ok(Json(serde_json::json!({ "token": token })))
}
