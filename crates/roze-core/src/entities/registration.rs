//! Channel registration entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::RozeId;

/// A Discord channel registered to receive game updates.
///
/// At most one registration exists per channel, and the roze id assigned
/// on creation is never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRegistration {
    pub channel_id: String,
    pub guild_id: String,
    pub roze_id: RozeId,
    pub created_at: DateTime<Utc>,
}

impl ChannelRegistration {
    /// Create a new registration with a freshly generated roze id.
    pub fn new(guild_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            guild_id: guild_id.into(),
            roze_id: RozeId::generate(),
            created_at: Utc::now(),
        }
    }

    /// URL path under which game webhooks reach this channel.
    pub fn webhook_path(&self) -> String {
        format!("/_/{}", self.roze_id)
    }
}
