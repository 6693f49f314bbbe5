//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (in-memory or PostgreSQL, see `auth-db`).

use async_trait::async_trait;

use crate::entities::Credential;
use crate::error::DomainError;
use crate::value_objects::CredentialId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Credential storage
///
/// Every method is atomic with respect to a single id: implementations must
/// never expose a partially applied write, and operations on different ids
/// must not serialize behind one another.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Insert or replace the hash stored for `id`
    async fn upsert(&self, id: &CredentialId, password_hash: &str) -> RepoResult<()>;

    /// Find a credential by id
    async fn find_by_id(&self, id: &CredentialId) -> RepoResult<Option<Credential>>;

    /// Check whether a credential exists
    async fn exists(&self, id: &CredentialId) -> RepoResult<bool>;

    /// Delete a credential, returning whether one was removed
    async fn delete(&self, id: &CredentialId) -> RepoResult<bool>;

    /// Replace the hash only if the stored hash still equals `current`
    ///
    /// Returns `false` when the credential was deleted or re-saved in between.
    async fn replace_hash(
        &self,
        id: &CredentialId,
        current: &str,
        replacement: &str,
    ) -> RepoResult<bool>;

    /// Number of stored credentials
    async fn count(&self) -> RepoResult<u64>;

    /// Check that the backing store is reachable
    async fn health_check(&self) -> RepoResult<()>;
}
