//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.
//! Production gets JSON output for log shipping, everything else a
//! human-readable format.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::Environment;

/// Initialize the tracing subscriber.
///
/// Uses the `RUST_LOG` environment variable for filtering if set,
/// otherwise defaults to "info" level.
///
/// # Panics
/// Panics if a subscriber is already set. Use [`try_init_tracing`] in
/// tests and other contexts where double initialization is possible.
pub fn init_tracing(env: Environment) {
    try_init_tracing(env).expect("tracing subscriber already initialized");
}

/// Try to initialize tracing, returning an error instead of panicking
/// when a subscriber is already installed.
pub fn try_init_tracing(env: Environment) -> Result<(), TracingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if env.is_production() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_file(true).with_line_number(true))
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    }
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
