//! Route definitions
//!
//! Credential and token routes are mounted under /auth.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{credentials, health, tokens};
use crate::state::AppState;

/// Create the main API router (health routes are separate)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/auth", auth_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Credential and token routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/save", post(credentials::save))
        .route("/verify", post(credentials::verify))
        .route("/has", get(credentials::has))
        .route("/delete", post(credentials::delete))
        .route("/jwt/encode", post(tokens::encode))
        .route("/jwt/verify", get(tokens::verify))
}
