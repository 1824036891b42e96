//! PostgreSQL implementation of ChannelRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use roze_core::{ChannelRegistration, ChannelRepository, RepoResult, RozeId};

use crate::models::RegistrationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ChannelRepository
#[derive(Clone)]
pub struct PgChannelRepository {
    pool: PgPool,
}

impl PgChannelRepository {
    /// Create a new PgChannelRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChannelRepository for PgChannelRepository {
    #[instrument(skip(self))]
    async fn find_by_channel_id(
        &self,
        channel_id: &str,
    ) -> RepoResult<Option<ChannelRegistration>> {
        let result = sqlx::query_as::<_, RegistrationModel>(
            r"
            SELECT channel_id, guild_id, roze_id, created_at
            FROM channel_registrations
            WHERE channel_id = $1
            ",
        )
        .bind(channel_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ChannelRegistration::from))
    }

    #[instrument(skip(self))]
    async fn find_by_roze_id(&self, roze_id: &RozeId) -> RepoResult<Option<ChannelRegistration>> {
        let result = sqlx::query_as::<_, RegistrationModel>(
            r"
            SELECT channel_id, guild_id, roze_id, created_at
            FROM channel_registrations
            WHERE roze_id = $1
            ",
        )
        .bind(roze_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ChannelRegistration::from))
    }

    #[instrument(skip(self, registration))]
    async fn create(&self, registration: &ChannelRegistration) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO channel_registrations (channel_id, guild_id, roze_id, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(&registration.channel_id)
        .bind(&registration.guild_id)
        .bind(registration.roze_id.as_str())
        .bind(registration.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
