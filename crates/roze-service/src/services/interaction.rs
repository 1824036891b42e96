//! Interaction routing
//!
//! Dispatches a parsed interaction through the command table and turns
//! every handler outcome - success or error - into the single reply
//! envelope. Command errors never fail the HTTP exchange: they are
//! logged and echoed back as chat text.

use tracing::{error, instrument};

use crate::dto::{CommandData, Interaction, InteractionKind, InteractionReply};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::identity::IdentityService;
use super::registration::RegistrationService;

/// The one top-level command this service answers to
const COMMAND_CIV: &str = "civ";
/// Sub-option registering the invoking channel
const OPTION_START: &str = "start";
/// Sub-option claiming a Steam identity
const OPTION_IAM: &str = "iam";

/// Interaction router
pub struct InteractionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InteractionService<'a> {
    /// Create a new InteractionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Route one interaction to its reply.
    ///
    /// The only error this returns is
    /// [`ServiceError::UnsupportedInteraction`], for interaction types
    /// outside PING and APPLICATION_COMMAND; everything else becomes a
    /// message reply.
    #[instrument(skip(self, interaction), fields(kind = ?interaction.kind))]
    pub async fn dispatch(&self, interaction: &Interaction) -> ServiceResult<InteractionReply> {
        match interaction.kind {
            InteractionKind::Ping => Ok(InteractionReply::pong()),
            InteractionKind::ApplicationCommand => {
                let reply = match self.handle_command(interaction).await {
                    Ok(message) => message,
                    Err(e) => {
                        error!(error = %e, "command failed");
                        e.to_string()
                    }
                };
                Ok(InteractionReply::message(reply))
            }
            InteractionKind::Unknown => Err(ServiceError::UnsupportedInteraction),
        }
    }

    /// Dispatch on command name, then sub-option name.
    async fn handle_command(&self, interaction: &Interaction) -> ServiceResult<String> {
        let data = interaction
            .data
            .as_ref()
            .ok_or(ServiceError::MissingField("data"))?;

        if data.name != COMMAND_CIV {
            return Err(ServiceError::UnrecognizedCommand(data.name.clone()));
        }
        let option = data
            .options
            .first()
            .ok_or_else(|| ServiceError::MissingOptions(data.name.clone()))?;

        match option.name.as_str() {
            OPTION_START => self.handle_start(interaction).await,
            OPTION_IAM => self.handle_iam(interaction, data).await,
            _ => Err(ServiceError::UnrecognizedOption(option.name.clone())),
        }
    }

    async fn handle_start(&self, interaction: &Interaction) -> ServiceResult<String> {
        let guild_id = interaction
            .guild_id
            .as_deref()
            .ok_or(ServiceError::MissingField("guild_id"))?;
        let channel_id = interaction
            .channel_id
            .as_deref()
            .ok_or(ServiceError::MissingField("channel_id"))?;

        let service = RegistrationService::new(self.ctx);
        let registration = service.register_channel(guild_id, channel_id).await?;
        Ok(service.welcome_message(&registration))
    }

    async fn handle_iam(
        &self,
        interaction: &Interaction,
        data: &CommandData,
    ) -> ServiceResult<String> {
        let channel_id = interaction
            .channel_id
            .as_deref()
            .ok_or(ServiceError::MissingField("channel_id"))?;
        let discord_user_id = interaction
            .member
            .as_ref()
            .map(|m| m.user.id.as_str())
            .ok_or(ServiceError::MissingField("member"))?;
        let vanity_or_id = data
            .options
            .first()
            .and_then(|option| option.options.first())
            .and_then(|value| value.as_str())
            .ok_or_else(|| ServiceError::MissingOptions(data.name.clone()))?;

        IdentityService::new(self.ctx)
            .claim(channel_id, discord_user_id, vanity_or_id)
            .await
    }
}
