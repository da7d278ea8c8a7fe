//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use bridge_common::{AppConfig, AppError};
use bridge_matrix::{MatrixClient, MatrixConfig};
use bridge_transform::TransformEngine;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create the Matrix client
    let matrix_config = MatrixConfig {
        homeserver: config.matrix.homeserver.clone(),
        access_token: config.matrix.access_token.clone(),
        send_timeout: Duration::from_secs(config.matrix.send_timeout_secs),
    };
    let client = MatrixClient::new(matrix_config).map_err(|e| AppError::Config(e.to_string()))?;
    info!(homeserver = %config.matrix.homeserver, "Matrix client ready");

    // Create the transformation engine with every built-in mapping
    let engine = TransformEngine::builtin();
    info!(mappings = engine.registry().len(), "Transformation engine ready");

    Ok(AppState::new(engine, Arc::new(client), config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {}", e)))?;

    // Create app state
    let state = create_app_state(config)?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
