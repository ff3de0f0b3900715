//! # Log Gateway
//!
//! HTTP gateway that creates, lists and deletes log records stored in an
//! OpenSearch-compatible search backend.
//!
//! ## Routes
//!
//! - `POST /api/log`: index a log under its caller-supplied id (201)
//! - `GET /api/log`: list every log (200)
//! - `DELETE /api/log/:id`: delete a log by id (200, or 404 when absent)
//! - `GET /health`: liveness check
//!
//! ## Modules
//!
//! - [`config`]: Environment configuration and dependency initialization
//! - [`server`]: Router, handlers and HTTP error mapping

pub mod config;
pub mod server;

pub use config::{Dependencies, GatewayConfig};

use thiserror::Error;

/// Errors that can occur during gateway initialization or while serving.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration or startup error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Listener or server loop error.
    #[error("Server error: {0}")]
    ServerError(#[from] std::io::Error),
}

impl GatewayError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
