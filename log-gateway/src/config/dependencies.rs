//! Dependency initialization and wiring for the log gateway.

use std::sync::Arc;
use tracing::info;

use crate::config::GatewayConfig;
use crate::GatewayError;
use log_gateway_repository::{LogIndexService, OpenSearchProvider};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The log service shared by every request handler.
    pub service: Arc<LogIndexService>,
}

impl Dependencies {
    /// Build the backend client and make sure the index exists.
    ///
    /// There is no retry: any failure here aborts startup.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(GatewayError)` - If the client cannot be built or the index cannot be created
    pub async fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        info!(
            backend_url = %config.backend.url,
            index = %config.backend.default_index,
            "Initializing dependencies"
        );

        let provider = OpenSearchProvider::new(&config.backend).map_err(|e| {
            GatewayError::config(format!("Failed to create OpenSearch provider: {}", e))
        })?;

        let service = LogIndexService::new(Box::new(provider));

        // Exits if the index cannot be created
        service
            .initialize()
            .await
            .map_err(|e| GatewayError::config(format!("Failed to ensure index exists: {}", e)))?;

        info!("Search backend ready");

        Ok(Self {
            service: Arc::new(service),
        })
    }
}
