//! Server configuration from environment variables.

use std::env;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// Shared-secret token for the approval gate. `None` leaves the gate
    /// open; absence must stay permissive.
    pub admin_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            log_level: "info".to_string(),
            cors_allowed_origins: "*".to_string(),
            admin_token: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `PORT`: Server port (default: 4000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    /// - `ADMIN_TOKEN`: Approval gate credential (default: unset, gate open;
    ///   an empty value also counts as unset)
    #[must_use]
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(4000);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let cors_allowed_origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

        let admin_token = env::var("ADMIN_TOKEN").ok().filter(|token| !token.is_empty());

        Self { port, log_level, cors_allowed_origins, admin_token }
    }

    /// Get the socket address for the server.
    #[must_use]
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 4000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.cors_allowed_origins, "*");
        assert!(config.admin_token.is_none());
        assert_eq!(config.socket_addr().port(), 4000);
    }

    #[test]
    fn test_from_env_values() {
        // SAFETY: This test is not run in parallel with other tests that
        // read these variables.
        unsafe {
            env::set_var("PORT", "5001");
            env::set_var("ADMIN_TOKEN", "s3cret");
        }

        let config = ServerConfig::from_env();
        assert_eq!(config.port, 5001);
        assert_eq!(config.admin_token.as_deref(), Some("s3cret"));

        // An empty admin token is the same as none.
        // SAFETY: see above.
        unsafe { env::set_var("ADMIN_TOKEN", "") };
        let config = ServerConfig::from_env();
        assert!(config.admin_token.is_none());

        // SAFETY: see above.
        unsafe {
            env::remove_var("PORT");
            env::remove_var("ADMIN_TOKEN");
        }
    }
}
