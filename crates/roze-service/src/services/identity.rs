//! Identity claim service
//!
//! Handles the `/civ iam` flow: resolving the supplied vanity name and
//! pointing the (channel, steam id) mapping at the invoking Discord
//! user.

use tracing::{error, info, instrument};

use roze_core::IdentityMapping;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Identity claim service
pub struct IdentityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IdentityService<'a> {
    /// Create a new IdentityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Claim a Steam identity for `discord_user_id` in `channel_id`.
    ///
    /// Returns the chat reply describing what happened: a fresh claim,
    /// an idempotent no-op, or a reassignment naming both users. The
    /// store is only written when the mapping actually changes, and the
    /// write is a single conditional upsert.
    #[instrument(skip(self))]
    pub async fn claim(
        &self,
        channel_id: &str,
        discord_user_id: &str,
        vanity_or_id: &str,
    ) -> ServiceResult<String> {
        let steam_id = self
            .ctx
            .resolver()
            .resolve(vanity_or_id)
            .await
            .map_err(|_| ServiceError::IdentityNotFound(vanity_or_id.to_string()))?;

        let current = self
            .ctx
            .mapping_repo()
            .find_discord_user(channel_id, &steam_id)
            .await
            .map_err(|e| {
                error!(error = %e, channel_id, "mapping lookup failed");
                ServiceError::ClaimFailed
            })?;

        let message = match current {
            Some(old) if old == discord_user_id => {
                // Idempotent no-op, nothing to write.
                format!("You are already {vanity_or_id}, <@{old}>.")
            }
            Some(old) => {
                self.write_mapping(channel_id, &steam_id, discord_user_id)
                    .await?;
                info!(channel_id, steam_id = %steam_id, from = old, to = discord_user_id,
                    "Mapping reassigned");
                format!("Updating {vanity_or_id}. Was <@{old}>. Now <@{discord_user_id}>.")
            }
            None => {
                self.write_mapping(channel_id, &steam_id, discord_user_id)
                    .await?;
                info!(channel_id, steam_id = %steam_id, discord_user_id, "Mapping created");
                format!("Got it. {vanity_or_id} is <@{discord_user_id}>.")
            }
        };

        Ok(message)
    }

    async fn write_mapping(
        &self,
        channel_id: &str,
        steam_id: &roze_core::SteamId64,
        discord_user_id: &str,
    ) -> ServiceResult<()> {
        let mapping = IdentityMapping::new(channel_id, steam_id.clone(), discord_user_id);
        self.ctx.mapping_repo().upsert(&mapping).await.map_err(|e| {
            error!(error = %e, channel_id, "mapping upsert failed");
            ServiceError::ClaimFailed
        })
    }
}
