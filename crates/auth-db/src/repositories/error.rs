//! Error handling utilities for repositories

use auth_core::error::DomainError;
use sqlx::Error as SqlxError;
use tracing::error;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    error!(error = %e, "Database operation failed");
    DomainError::DatabaseError(e.to_string())
}
