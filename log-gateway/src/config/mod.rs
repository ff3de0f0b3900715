//! Configuration and dependency initialization.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{
    GatewayConfig, BACKEND_INDEX_VAR, BACKEND_URL_VAR, ENVIRONMENT, SERVER_HOST, SERVER_PORT,
};
