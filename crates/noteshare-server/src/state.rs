//! Application state shared across handlers.

use std::sync::Arc;

use noteshare_store::AccessService;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// The access facade owning all domain state.
    service: Arc<AccessService>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(service: AccessService, config: ServerConfig) -> Self {
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the access service.
    pub fn service(&self) -> &AccessService {
        &self.service
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
