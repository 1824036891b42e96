//! # roze-db
//!
//! Database layer implementing the repository traits from `roze-core`
//! with PostgreSQL via SQLx: connection pool management, row models,
//! and repository implementations.

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::{PgChannelRepository, PgMappingRepository};

/// Apply the embedded SQL migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
