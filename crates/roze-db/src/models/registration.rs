//! Channel registration database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use roze_core::{ChannelRegistration, RozeId};

/// Database model for the channel_registrations table
#[derive(Debug, Clone, FromRow)]
pub struct RegistrationModel {
    pub channel_id: String,
    pub guild_id: String,
    pub roze_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<RegistrationModel> for ChannelRegistration {
    fn from(model: RegistrationModel) -> Self {
        Self {
            channel_id: model.channel_id,
            guild_id: model.guild_id,
            roze_id: RozeId::new(model.roze_id),
            created_at: model.created_at,
        }
    }
}
