//! Application state
//!
//! Holds the shared state for the Axum application: the service
//! context, the configuration, and the interaction signature verifier.

use std::sync::Arc;

use roze_common::AppConfig;
use roze_discord::InteractionVerifier;
use roze_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    verifier: Arc<InteractionVerifier>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        config: AppConfig,
        verifier: InteractionVerifier,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            verifier: Arc::new(verifier),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the interaction signature verifier
    pub fn verifier(&self) -> &InteractionVerifier {
        &self.verifier
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
