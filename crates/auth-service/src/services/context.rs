//! Service context - dependency container for services
//!
//! Holds the credential repository and the hashing and signing services.

use std::sync::Arc;

use auth_common::auth::{JwtService, PasswordService};
use auth_core::traits::CredentialRepository;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap; every field is shared.
#[derive(Clone)]
pub struct ServiceContext {
    credential_repo: Arc<dyn CredentialRepository>,
    password_service: PasswordService,
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        credential_repo: Arc<dyn CredentialRepository>,
        password_service: PasswordService,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            credential_repo,
            password_service,
            jwt_service,
        }
    }

    /// Get the credential repository
    pub fn credential_repo(&self) -> &dyn CredentialRepository {
        self.credential_repo.as_ref()
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("credential_repo", &"dyn CredentialRepository")
            .field("password_service", &self.password_service)
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// The password service falls back to the default Argon2id parameters when
/// not set.
#[derive(Default)]
pub struct ServiceContextBuilder {
    credential_repo: Option<Arc<dyn CredentialRepository>>,
    password_service: Option<PasswordService>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credential_repo(mut self, repo: Arc<dyn CredentialRepository>) -> Self {
        self.credential_repo = Some(repo);
        self
    }

    pub fn password_service(mut self, service: PasswordService) -> Self {
        self.password_service = Some(service);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.credential_repo
                .ok_or_else(|| ServiceError::validation("credential_repo is required"))?,
            self.password_service.unwrap_or_default(),
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}
