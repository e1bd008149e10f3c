//! noteshare-server: HTTP boundary for the note access service
//!
//! This crate provides:
//! - REST endpoints under `/api/storage` mapping onto the access facade
//! - Health check and metrics exposition endpoints
//! - Environment-driven configuration
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! The handlers themselves are thin: they deserialize the wire shapes,
//! call [`noteshare_store::AccessService`], and map its typed errors to
//! HTTP statuses.
//!
//! # Usage
//!
//! ```rust,ignore
//! use noteshare_server::{config::ServerConfig, state::AppState};
//! use noteshare_store::{AccessService, AdminGate, Catalog};
//!
//! let config = ServerConfig::from_env();
//! let admin = AdminGate::new(config.admin_token.clone());
//! let state = AppState::new(AccessService::new(Catalog::sample(), admin), config);
//! let app = noteshare_server::routes::build_router(state);
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use noteshare_core;
pub use noteshare_store;
