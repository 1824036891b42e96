//! Game webhook relay
//!
//! POST /_/{roze_id}
//!
//! The URL handed out on registration. Game updates posted here are
//! forwarded into the registered Discord channel; delivery failures are
//! logged, not surfaced, so a flaky Discord API never breaks the game's
//! webhook sender.

use axum::{
    extract::{Path, State},
    Json,
};

use roze_service::{GameUpdate, NotifyService};

use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Relay a game update into the channel registered under the roze id
pub async fn relay_game_update(
    State(state): State<AppState>,
    Path(roze_id): Path<String>,
    Json(update): Json<GameUpdate>,
) -> ApiResult<NoContent> {
    let service = NotifyService::new(state.service_context());
    service.relay_game_update(&roze_id, &update.content).await?;
    Ok(NoContent)
}
