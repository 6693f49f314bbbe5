//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use auth_common::{AppConfig, AppError, JwtService, PasswordService, StorageBackend};
use auth_core::traits::CredentialRepository;
use auth_db::{
    create_pool, ensure_schema, MemoryCredentialRepository, PgCredentialRepository, PoolConfig,
};
use auth_service::ServiceContextBuilder;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    router.with_state(state)
}

/// Open the credential store selected by configuration
pub async fn create_repository(
    config: &AppConfig,
) -> Result<Arc<dyn CredentialRepository>, AppError> {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory credential store");
            Ok(Arc::new(MemoryCredentialRepository::new()))
        }
        StorageBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or_else(|| AppError::Config("DATABASE_URL is required".to_string()))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PoolConfig::from(database))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            ensure_schema(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            Ok(Arc::new(PgCredentialRepository::new(pool)))
        }
    }
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let credential_repo = create_repository(&config).await?;

    let password_service = PasswordService::with_config(&config.hashing)?;
    let jwt_service = Arc::new(JwtService::from_config(&config.jwt));

    let service_context = ServiceContextBuilder::new()
        .credential_repo(credential_repo)
        .password_service(password_service)
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Bind to `addr` and run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    serve(listener, app).await
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &addr).await
}
