//! Webhook bridge server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p bridge-api
//! ```
//!
//! Configuration is loaded from environment variables (a `.env` file is
//! honored in development).

use bridge_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Tracing may not be up yet when startup fails.
        eprintln!("bridge-api failed to start: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first; the environment decides the log format
    let config = AppConfig::from_env()?;

    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::development()
    };
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    info!(
        env = ?config.app.env,
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    // Run the server
    bridge_api::run(config).await?;

    Ok(())
}
