//! Game-webhook relay service
//!
//! Looks up the channel behind a roze id and forwards game updates into
//! it through the Discord REST client, outside the interaction
//! request/response cycle.

use tracing::{error, instrument};

use roze_core::{ChannelRegistration, DomainError, RozeId};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Relay service for inbound game webhooks
pub struct NotifyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotifyService<'a> {
    /// Create a new NotifyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Find the registration behind a roze id.
    #[instrument(skip(self))]
    pub async fn channel_for_roze_id(&self, roze_id: &str) -> ServiceResult<ChannelRegistration> {
        let roze_id = RozeId::new(roze_id);
        self.ctx
            .channel_repo()
            .find_by_roze_id(&roze_id)
            .await?
            .ok_or_else(|| DomainError::RozeIdNotFound(roze_id.into_inner()).into())
    }

    /// Relay a game update into the channel registered under `roze_id`.
    ///
    /// An unknown roze id is an error; a failed Discord delivery is
    /// logged and swallowed, matching the fire-and-forget nature of the
    /// notifier.
    #[instrument(skip(self, content))]
    pub async fn relay_game_update(&self, roze_id: &str, content: &str) -> ServiceResult<()> {
        let registration = self.channel_for_roze_id(roze_id).await?;

        if let Err(e) = self
            .ctx
            .discord()
            .post_message(&registration.channel_id, content)
            .await
        {
            error!(error = %e, channel_id = registration.channel_id, "relay delivery failed");
        }

        Ok(())
    }
}
