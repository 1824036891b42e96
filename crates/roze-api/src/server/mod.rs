//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use roze_common::{AppConfig, AppError};
use roze_db::{create_pool, PgChannelRepository, PgMappingRepository, PoolConfig};
use roze_discord::{DiscordClient, InteractionVerifier};
use roze_service::ServiceContextBuilder;
use roze_steam::SteamWebResolver;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Parse the public key up front; a bad key should fail startup,
    // not every request.
    let verifier = InteractionVerifier::from_hex(&config.discord.public_key)
        .map_err(|e| AppError::Config(format!("invalid DISCORD_PUBLIC_KEY: {e}")))?;

    // Create database pool
    info!("Connecting to PostgreSQL...");
    let pool_config = PoolConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&pool_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    roze_db::run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create outbound clients
    let resolver = SteamWebResolver::new(Duration::from_secs(config.steam.timeout_secs))
        .map_err(|e| AppError::ExternalService(e.to_string()))?;
    let discord = DiscordClient::new(config.discord.bot_token.clone())
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    // Create repositories
    let channel_repo = Arc::new(PgChannelRepository::new(pool.clone()));
    let mapping_repo = Arc::new(PgMappingRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .channel_repo(channel_repo)
        .mapping_repo(mapping_repo)
        .resolver(Arc::new(resolver))
        .discord(Arc::new(discord))
        .base_url(config.webhook.base_url.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, verifier))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
