//! Identity mapping database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use roze_core::{IdentityMapping, SteamId64};

/// Database model for the identity_mappings table
#[derive(Debug, Clone, FromRow)]
pub struct MappingModel {
    pub channel_id: String,
    pub steam_id: String,
    pub discord_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MappingModel> for IdentityMapping {
    fn from(model: MappingModel) -> Self {
        Self {
            channel_id: model.channel_id,
            steam_id: SteamId64::new(model.steam_id),
            discord_user_id: model.discord_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
