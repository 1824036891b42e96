//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{civ, health, interactions};
use crate::state::AppState;

/// Create the main router with the webhook endpoints
pub fn create_router() -> Router<AppState> {
    Router::new()
        // Discord interactions callback (signed)
        .route("/discord", post(interactions::handle_interaction))
        // Game webhook relay, addressed by roze id
        .route("/_/:roze_id", post(civ::relay_game_update))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
