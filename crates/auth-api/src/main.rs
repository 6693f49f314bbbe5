//! Auth API Server entry point
//!
//! Run with:
//! ```bash
//! JWT_SECRET=change-me cargo run -p auth-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use auth_common::{init_tracing, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env file if present so APP_ENV can pick the log format
    let _ = dotenvy::dotenv();
    let env = std::env::var("APP_ENV")
        .ok()
        .and_then(|s| s.parse::<Environment>().ok())
        .unwrap_or_default();

    // Initialize tracing
    if let Err(e) = init_tracing(TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Auth API Server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        backend = ?config.storage.backend,
        "Configuration loaded"
    );

    // Run the server
    auth_api::run(config).await?;

    Ok(())
}
