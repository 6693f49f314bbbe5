//! In-memory implementation of CredentialRepository

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::instrument;

use auth_core::entities::Credential;
use auth_core::traits::{CredentialRepository, RepoResult};
use auth_core::value_objects::CredentialId;

/// In-memory credential store
///
/// Backed by a sharded map: every operation holds the lock of a single shard
/// for the duration of one entry access, so writes to different ids proceed
/// concurrently. Clones share the same map. Contents are lost on shutdown.
#[derive(Clone, Default)]
pub struct MemoryCredentialRepository {
    entries: Arc<DashMap<CredentialId, Credential>>,
}

impl MemoryCredentialRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialRepository for MemoryCredentialRepository {
    #[instrument(skip(self, password_hash))]
    async fn upsert(&self, id: &CredentialId, password_hash: &str) -> RepoResult<()> {
        self.entries
            .entry(id.clone())
            .and_modify(|credential| credential.set_password_hash(password_hash.to_string()))
            .or_insert_with(|| Credential::new(id.clone(), password_hash.to_string()));
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &CredentialId) -> RepoResult<Option<Credential>> {
        Ok(self.entries.get(id).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: &CredentialId) -> RepoResult<bool> {
        Ok(self.entries.contains_key(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &CredentialId) -> RepoResult<bool> {
        Ok(self.entries.remove(id).is_some())
    }

    #[instrument(skip(self, current, replacement))]
    async fn replace_hash(
        &self,
        id: &CredentialId,
        current: &str,
        replacement: &str,
    ) -> RepoResult<bool> {
        let Some(mut entry) = self.entries.get_mut(id) else {
            return Ok(false);
        };

        if entry.password_hash != current {
            return Ok(false);
        }

        entry.set_password_hash(replacement.to_string());
        Ok(true)
    }

    async fn count(&self) -> RepoResult<u64> {
        Ok(self.entries.len() as u64)
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}
