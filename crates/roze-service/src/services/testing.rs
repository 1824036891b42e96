//! In-memory fakes and context construction for service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use roze_core::{
    ChannelRegistration, ChannelRepository, DomainError, IdentityMapping, MappingRepository,
    RepoResult, ResolveError, RozeId, SteamId64, SteamResolver,
};
use roze_db::PgPool;
use roze_discord::DiscordClient;

use super::context::{ServiceContext, ServiceContextBuilder};

/// In-memory ChannelRepository with injectable write failures
#[derive(Default)]
pub struct InMemoryChannelRepository {
    rows: Mutex<Vec<ChannelRegistration>>,
    pub fail_writes: AtomicBool,
}

impl InMemoryChannelRepository {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ChannelRepository for InMemoryChannelRepository {
    async fn find_by_channel_id(
        &self,
        channel_id: &str,
    ) -> RepoResult<Option<ChannelRegistration>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.channel_id == channel_id)
            .cloned())
    }

    async fn find_by_roze_id(&self, roze_id: &RozeId) -> RepoResult<Option<ChannelRegistration>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| &r.roze_id == roze_id)
            .cloned())
    }

    async fn create(&self, registration: &ChannelRegistration) -> RepoResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("injected failure".to_string()));
        }
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| {
            r.channel_id == registration.channel_id || r.roze_id == registration.roze_id
        }) {
            return Err(DomainError::DatabaseError("unique violation".to_string()));
        }
        rows.push(registration.clone());
        Ok(())
    }
}

/// In-memory MappingRepository counting writes
#[derive(Default)]
pub struct InMemoryMappingRepository {
    rows: Mutex<HashMap<(String, String), String>>,
    pub writes: AtomicUsize,
}

impl InMemoryMappingRepository {
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn find_discord_user(
        &self,
        channel_id: &str,
        steam_id: &SteamId64,
    ) -> RepoResult<Option<String>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .get(&(channel_id.to_string(), steam_id.as_str().to_string()))
            .cloned())
    }

    async fn upsert(&self, mapping: &IdentityMapping) -> RepoResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().insert(
            (
                mapping.channel_id.clone(),
                mapping.steam_id.as_str().to_string(),
            ),
            mapping.discord_user_id.clone(),
        );
        Ok(())
    }
}

/// Resolver fake backed by a fixed name table
#[derive(Default)]
pub struct FakeResolver {
    names: HashMap<String, SteamId64>,
}

impl FakeResolver {
    pub fn with(mut self, name: &str, steam_id: &str) -> Self {
        self.names.insert(name.to_string(), SteamId64::new(steam_id));
        self
    }
}

#[async_trait]
impl SteamResolver for FakeResolver {
    async fn resolve(&self, name: &str) -> Result<SteamId64, ResolveError> {
        if let Some(id) = self.names.get(name) {
            return Ok(id.clone());
        }
        if let Ok(id) = SteamId64::parse(name) {
            return Ok(id);
        }
        Err(ResolveError::NotFound(name.to_string()))
    }
}

/// A ServiceContext over fakes, keeping handles to the fakes for
/// assertions
pub struct TestContext {
    pub ctx: ServiceContext,
    pub channels: Arc<InMemoryChannelRepository>,
    pub mappings: Arc<InMemoryMappingRepository>,
}

pub fn test_context(resolver: FakeResolver) -> TestContext {
    let channels = Arc::new(InMemoryChannelRepository::default());
    let mappings = Arc::new(InMemoryMappingRepository::default());

    // Lazy pool: never connected, present only to satisfy the context.
    let pool = PgPool::connect_lazy("postgres://postgres@localhost/roze_test")
        .expect("lazy pool construction cannot fail");
    let discord = DiscordClient::with_base_url("http://127.0.0.1:1", "test-token")
        .expect("client construction");

    let ctx = ServiceContextBuilder::new()
        .pool(pool)
        .channel_repo(channels.clone())
        .mapping_repo(mappings.clone())
        .resolver(Arc::new(resolver))
        .discord(Arc::new(discord))
        .base_url("http://roze.run")
        .build()
        .expect("all dependencies supplied");

    TestContext {
        ctx,
        channels,
        mappings,
    }
}
