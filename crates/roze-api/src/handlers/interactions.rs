//! Discord interactions endpoint
//!
//! POST /discord
//!
//! The body must be read raw: the Ed25519 signature covers the exact
//! bytes Discord sent, so verification happens before any JSON parsing.
//! Once verified, routing errors never fail the HTTP exchange - they
//! come back as chat replies.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use roze_service::{Interaction, InteractionService, ServiceError};

use crate::state::AppState;

const SIGNATURE_HEADER: &str = "x-signature-ed25519";
const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Handle a signed interaction callback
pub async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some((signature, timestamp)) = signature_headers(&headers) else {
        return (StatusCode::UNAUTHORIZED, "Bad request signature").into_response();
    };

    if let Err(e) = state.verifier().verify(signature, timestamp, &body) {
        warn!(error = %e, "rejected interaction with bad signature");
        return (StatusCode::UNAUTHORIZED, "Bad request signature").into_response();
    }

    let interaction: Interaction = match serde_json::from_slice(&body) {
        Ok(interaction) => interaction,
        Err(e) => {
            warn!(error = %e, "rejected malformed interaction payload");
            return (StatusCode::BAD_REQUEST, "Bad data").into_response();
        }
    };

    let service = InteractionService::new(state.service_context());
    match service.dispatch(&interaction).await {
        Ok(reply) => Json(reply).into_response(),
        // Only unsupported interaction types reach here; everything
        // else already became a chat reply.
        Err(ServiceError::UnsupportedInteraction) => {
            (StatusCode::BAD_REQUEST, "Bad data").into_response()
        }
        Err(e) => {
            warn!(error = %e, "unexpected dispatch error");
            (StatusCode::BAD_REQUEST, "Bad data").into_response()
        }
    }
}

fn signature_headers(headers: &HeaderMap) -> Option<(&str, &str)> {
    let signature = headers.get(SIGNATURE_HEADER)?.to_str().ok()?;
    let timestamp = headers.get(TIMESTAMP_HEADER)?.to_str().ok()?;
    Some((signature, timestamp))
}
