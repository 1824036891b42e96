//! Roze server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p roze-api
//! ```
//!
//! Configuration is loaded from environment variables (see
//! `AppConfig::from_env`).

use roze_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so tracing knows the environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing(config.app.env) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    if let Err(e) = roze_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
