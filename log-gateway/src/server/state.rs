//! Shared state for the Axum server.

use std::sync::Arc;

use log_gateway_repository::LogIndexService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<LogIndexService>,
}
