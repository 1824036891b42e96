//! Steam identity resolver port

use async_trait::async_trait;
use thiserror::Error;

use crate::value_objects::SteamId64;

/// Resolver failure, as seen by callers.
///
/// Network errors, bad vanity names and service-side misses all collapse
/// into the single not-found outcome; the underlying cause is logged by
/// the implementation, not surfaced here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no SteamID64 found for {0}")]
    NotFound(String),
}

/// Resolves a user-supplied vanity name (or raw id) to a SteamID64.
#[async_trait]
pub trait SteamResolver: Send + Sync {
    /// Resolve `name` to a stable id, with at most one external round
    /// trip per invocation.
    async fn resolve(&self, name: &str) -> Result<SteamId64, ResolveError>;
}
