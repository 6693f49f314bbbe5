//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use auth_core::{CredentialId, DomainError};
use serde::Deserialize;
use validator::Validate;

/// Credential save / verify request
#[derive(Clone, Deserialize, Validate)]
pub struct AuthRequest {
    #[validate(length(min = 1, max = 255, message = "Id must be 1-255 characters"))]
    pub id: String,

    pub password: String,
}

impl AuthRequest {
    /// Parse the id into its domain type
    pub fn credential_id(&self) -> Result<CredentialId, DomainError> {
        Ok(CredentialId::parse(self.id.as_str())?)
    }
}

impl std::fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthRequest")
            .field("id", &self.id)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// `?id=` query for existence checks and deletion
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IdQuery {
    #[validate(length(min = 1, max = 255, message = "Id must be 1-255 characters"))]
    pub id: String,
}

impl IdQuery {
    /// Parse the id into its domain type
    pub fn credential_id(&self) -> Result<CredentialId, DomainError> {
        Ok(CredentialId::parse(self.id.as_str())?)
    }
}

/// `?token=` query for token verification
#[derive(Clone, Deserialize)]
pub struct TokenQuery {
    pub token: String,
}
