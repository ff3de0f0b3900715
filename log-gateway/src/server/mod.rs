//! HTTP server setup and routing.

pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    http::header,
    middleware,
    response::Response,
    routing::{delete, get},
    Router,
};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::GatewayError;
use self::state::AppState;

/// Remove the server identity header from every response.
async fn strip_server_header(mut response: Response) -> Response {
    response.headers_mut().remove(header::SERVER);
    response
}

/// Create the Axum application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/log",
            get(handlers::list_logs).post(handlers::create_log),
        )
        .route("/api/log/:id", delete(handlers::delete_log))
        .route("/health", get(handlers::health_check))
        .layer(middleware::map_response(strip_server_header))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server on the specified address
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), GatewayError> {
    info!("Server listening on {}", addr);
    info!("- Logs endpoint: http://{}/api/log", addr);
    info!("- Health endpoint: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
