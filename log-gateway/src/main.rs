//! Log Gateway Main Entry Point
//!
//! Connects to the search backend, makes sure the log index exists and serves
//! the log HTTP API on port 9090.

use dotenv::dotenv;
use log_gateway::server::{self, state::AppState};
use log_gateway::{Dependencies, GatewayConfig, GatewayError};
use std::env;
use tracing::{error, info, info_span, Instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("log_gateway=info,log_gateway_repository=info,tower_http=info")
    });

    let json_output = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init();

        info!(
            service_name = "log-gateway",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with JSON format"
        );
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();

        info!(
            service_name = "log-gateway",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with console output"
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    let config = GatewayConfig::from_env();
    let span = info_span!("log_gateway", environment = config.environment);

    async move {
        info!("Starting log gateway");

        let deps = match Dependencies::new(&config).await {
            Ok(deps) => {
                info!("Dependencies initialized successfully");
                deps
            }
            Err(e) => {
                error!(error = %e, "Failed to initialize dependencies");
                return Err(e);
            }
        };

        let app = server::create_app(AppState {
            service: deps.service,
        });

        if let Err(e) = server::run_server(app, config.listen_addr).await {
            error!(error = %e, "Log gateway failed");
            return Err(e);
        }

        Ok(())
    }
    .instrument(span)
    .await
}
