//! Channel registration service
//!
//! Handles the `/civ start` flow: registering the invoking channel and
//! handing out its webhook URL.

use tracing::{error, info, instrument};

use roze_core::ChannelRegistration;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Channel registration service
pub struct RegistrationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RegistrationService<'a> {
    /// Create a new RegistrationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a channel, idempotently.
    ///
    /// Repeated invocations for the same channel return the original
    /// registration; the roze id is never regenerated.
    #[instrument(skip(self))]
    pub async fn register_channel(
        &self,
        guild_id: &str,
        channel_id: &str,
    ) -> ServiceResult<ChannelRegistration> {
        if let Some(existing) = self
            .ctx
            .channel_repo()
            .find_by_channel_id(channel_id)
            .await
            .map_err(|e| {
                error!(error = %e, channel_id, "registration lookup failed");
                ServiceError::StartFailed
            })?
        {
            return Ok(existing);
        }

        let registration = ChannelRegistration::new(guild_id, channel_id);
        self.ctx
            .channel_repo()
            .create(&registration)
            .await
            .map_err(|e| {
                error!(error = %e, channel_id, "registration insert failed");
                ServiceError::StartFailed
            })?;

        info!(channel_id, roze_id = %registration.roze_id, "Channel registered");
        Ok(registration)
    }

    /// The chat reply for a successful registration.
    pub fn welcome_message(&self, registration: &ChannelRegistration) -> String {
        let url = format!("{}/_/{}", self.ctx.base_url(), registration.roze_id);
        format!(
            "I've registered your channel. You can use {url} for the webhook in Civ \
             and updates will show up here. Players can use `/civ iam` to map their \
             steam handles to their discord names."
        )
    }
}
