//! Identity mapping entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::SteamId64;

/// Association between a Steam account and a Discord user, scoped to a
/// channel.
///
/// A given (channel, steam id) pair points at exactly one Discord user at
/// a time; re-claiming the same Steam id in the same channel re-points
/// the mapping rather than adding a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityMapping {
    pub channel_id: String,
    pub steam_id: SteamId64,
    pub discord_user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IdentityMapping {
    /// Create a new mapping claimed by `discord_user_id`.
    pub fn new(
        channel_id: impl Into<String>,
        steam_id: SteamId64,
        discord_user_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            channel_id: channel_id.into(),
            steam_id,
            discord_user_id: discord_user_id.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether this mapping is currently held by the given user.
    #[inline]
    pub fn is_claimed_by(&self, discord_user_id: &str) -> bool {
        self.discord_user_id == discord_user_id
    }

    /// Re-point the mapping at a different Discord user.
    pub fn reassign(&mut self, discord_user_id: impl Into<String>) {
        self.discord_user_id = discord_user_id.into();
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steam_id() -> SteamId64 {
        SteamId64::new("76561197960287930")
    }

    #[test]
    fn test_is_claimed_by() {
        let mapping = IdentityMapping::new("C1", steam_id(), "D1");
        assert!(mapping.is_claimed_by("D1"));
        assert!(!mapping.is_claimed_by("D2"));
    }

    #[test]
    fn test_reassign() {
        let mut mapping = IdentityMapping::new("C1", steam_id(), "D1");
        mapping.reassign("D2");
        assert!(mapping.is_claimed_by("D2"));
        assert_eq!(mapping.channel_id, "C1");
        assert_eq!(mapping.steam_id, steam_id());
    }
}
