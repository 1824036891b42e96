//! PostgreSQL implementation of MappingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use roze_core::{IdentityMapping, MappingRepository, RepoResult, SteamId64};

use super::error::map_db_error;

/// PostgreSQL implementation of MappingRepository
#[derive(Clone)]
pub struct PgMappingRepository {
    pool: PgPool,
}

impl PgMappingRepository {
    /// Create a new PgMappingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    #[instrument(skip(self))]
    async fn find_discord_user(
        &self,
        channel_id: &str,
        steam_id: &SteamId64,
    ) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT discord_id
            FROM identity_mappings
            WHERE channel_id = $1 AND steam_id = $2
            ",
        )
        .bind(channel_id)
        .bind(steam_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    // A single conditional write: concurrent claims of the same
    // (channel, steam id) pair resolve to last-writer-wins without
    // duplicate rows or a lost insert.
    #[instrument(skip(self, mapping))]
    async fn upsert(&self, mapping: &IdentityMapping) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO identity_mappings (channel_id, steam_id, discord_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (channel_id, steam_id)
            DO UPDATE SET discord_id = EXCLUDED.discord_id, updated_at = NOW()
            ",
        )
        .bind(&mapping.channel_id)
        .bind(mapping.steam_id.as_str())
        .bind(&mapping.discord_user_id)
        .bind(mapping.created_at)
        .bind(mapping.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
