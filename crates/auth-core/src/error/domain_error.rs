//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::CredentialIdError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid credential id: {0}")]
    InvalidCredentialId(#[from] CredentialIdError),

    /// Storage backend failure (connection, query, corrupt row)
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentialId(_) => "INVALID_CREDENTIAL_ID",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidCredentialId(_))
    }
}
