//! Gateway settings read from the environment.

use std::env;
use std::net::SocketAddr;

use log_gateway_repository::config::{DEFAULT_BACKEND_URL, DEFAULT_INDEX_NAME};
use log_gateway_repository::BackendConfig;

/// Listener address: all interfaces.
pub const SERVER_HOST: [u8; 4] = [0, 0, 0, 0];

/// Listener port.
pub const SERVER_PORT: u16 = 9090;

/// Deployment environment label attached to startup logs.
pub const ENVIRONMENT: &str = "production";

/// Environment variable holding the backend URL.
pub const BACKEND_URL_VAR: &str = "ELASTIC_SEARCH_URL";

/// Environment variable holding the default index name.
pub const BACKEND_INDEX_VAR: &str = "ELASTIC_SEARCH_INDEX";

/// Everything the gateway needs to start, resolved once at boot.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Search backend connection settings.
    pub backend: BackendConfig,
    /// Address the HTTP listener binds to.
    pub listen_addr: SocketAddr,
    /// Deployment environment label.
    pub environment: &'static str,
}

impl GatewayConfig {
    /// Build the configuration from process environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTIC_SEARCH_URL`: backend URL (default: http://localhost:9200)
    /// - `ELASTIC_SEARCH_INDEX`: default index name (default: logs)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            backend: BackendConfig::new(
                read(BACKEND_URL_VAR, DEFAULT_BACKEND_URL),
                read(BACKEND_INDEX_VAR, DEFAULT_INDEX_NAME),
            ),
            listen_addr: SocketAddr::from((SERVER_HOST, SERVER_PORT)),
            environment: ENVIRONMENT,
        }
    }
}
