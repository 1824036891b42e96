//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Handlers receive these behind `Arc<dyn _>`
//! and never touch a connection directly.

use async_trait::async_trait;

use crate::entities::{ChannelRegistration, IdentityMapping};
use crate::error::DomainError;
use crate::value_objects::{RozeId, SteamId64};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Storage for channel registrations.
#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Find a registration by its Discord channel id
    async fn find_by_channel_id(
        &self,
        channel_id: &str,
    ) -> RepoResult<Option<ChannelRegistration>>;

    /// Find a registration by its public roze id
    async fn find_by_roze_id(&self, roze_id: &RozeId) -> RepoResult<Option<ChannelRegistration>>;

    /// Persist a new registration.
    ///
    /// Fails if the channel is already registered or the roze id
    /// collides (both are unique columns).
    async fn create(&self, registration: &ChannelRegistration) -> RepoResult<()>;
}

/// Storage for Steam-to-Discord identity mappings.
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Current Discord user holding (channel, steam id), if any
    async fn find_discord_user(
        &self,
        channel_id: &str,
        steam_id: &SteamId64,
    ) -> RepoResult<Option<String>>;

    /// Insert or re-point a mapping in a single conditional write.
    ///
    /// Concurrent claims of the same (channel, steam id) pair resolve to
    /// last-writer-wins without ever producing duplicate rows.
    async fn upsert(&self, mapping: &IdentityMapping) -> RepoResult<()>;
}
