//! Service context - dependency container for services
//!
//! Owns every collaborator the handlers need: the repositories, the
//! resolver, the Discord REST client, and the webhook base URL. Built
//! once at startup and shared behind an `Arc`; handlers never reach for
//! globals.

use std::sync::Arc;

use roze_core::{ChannelRepository, MappingRepository, SteamResolver};
use roze_db::PgPool;
use roze_discord::DiscordClient;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    channel_repo: Arc<dyn ChannelRepository>,
    mapping_repo: Arc<dyn MappingRepository>,
    resolver: Arc<dyn SteamResolver>,
    discord: Arc<DiscordClient>,
    base_url: String,
}

impl ServiceContext {
    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the channel registration repository
    pub fn channel_repo(&self) -> &dyn ChannelRepository {
        self.channel_repo.as_ref()
    }

    /// Get the identity mapping repository
    pub fn mapping_repo(&self) -> &dyn MappingRepository {
        self.mapping_repo.as_ref()
    }

    /// Get the Steam identity resolver
    pub fn resolver(&self) -> &dyn SteamResolver {
        self.resolver.as_ref()
    }

    /// Get the Discord REST client
    pub fn discord(&self) -> &DiscordClient {
        self.discord.as_ref()
    }

    /// Base URL embedded in the webhook link handed out on registration
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for creating a ServiceContext
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    channel_repo: Option<Arc<dyn ChannelRepository>>,
    mapping_repo: Option<Arc<dyn MappingRepository>>,
    resolver: Option<Arc<dyn SteamResolver>>,
    discord: Option<Arc<DiscordClient>>,
    base_url: Option<String>,
}

/// Error when a required dependency was not supplied
#[derive(Debug, thiserror::Error)]
#[error("missing dependency: {0}")]
pub struct ContextBuildError(&'static str);

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            channel_repo: None,
            mapping_repo: None,
            resolver: None,
            discord: None,
            base_url: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn channel_repo(mut self, repo: Arc<dyn ChannelRepository>) -> Self {
        self.channel_repo = Some(repo);
        self
    }

    pub fn mapping_repo(mut self, repo: Arc<dyn MappingRepository>) -> Self {
        self.mapping_repo = Some(repo);
        self
    }

    pub fn resolver(mut self, resolver: Arc<dyn SteamResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn discord(mut self, discord: Arc<DiscordClient>) -> Self {
        self.discord = Some(discord);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Build the context, failing on any missing dependency
    pub fn build(self) -> Result<ServiceContext, ContextBuildError> {
        Ok(ServiceContext {
            pool: self.pool.ok_or(ContextBuildError("pool"))?,
            channel_repo: self.channel_repo.ok_or(ContextBuildError("channel_repo"))?,
            mapping_repo: self.mapping_repo.ok_or(ContextBuildError("mapping_repo"))?,
            resolver: self.resolver.ok_or(ContextBuildError("resolver"))?,
            discord: self.discord.ok_or(ContextBuildError("discord"))?,
            base_url: self.base_url.ok_or(ContextBuildError("base_url"))?,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
