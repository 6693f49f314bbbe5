//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use auth_service::dto::{HealthResponse, ReadinessResponse};
use axum::{extract::State, http::StatusCode, Json};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with storage health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let storage_healthy = state
        .service_context()
        .credential_repo()
        .health_check()
        .await
        .is_ok();

    let response = ReadinessResponse::ready(storage_healthy);
    let status = if storage_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
