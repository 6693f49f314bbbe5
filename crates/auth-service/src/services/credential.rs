//! Credential service
//!
//! Stores, checks, and removes id/password pairs. Argon2 work runs on the
//! blocking thread pool so request workers are never stalled by hashing.

use auth_core::value_objects::CredentialId;
use tracing::{debug, info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Credential service
pub struct CredentialService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CredentialService<'a> {
    /// Create a new CredentialService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Hash `password` and store it under `id`, replacing any previous hash
    #[instrument(skip_all, fields(id = %id))]
    pub async fn save(&self, id: &CredentialId, password: &str) -> ServiceResult<()> {
        let hasher = self.ctx.password_service().clone();
        let password = password.to_owned();

        let password_hash = run_blocking(move || hasher.hash(&password)).await??;

        self.ctx.credential_repo().upsert(id, &password_hash).await?;

        info!("Credential saved");
        Ok(())
    }

    /// Check whether a credential is stored for `id`
    #[instrument(skip_all, fields(id = %id))]
    pub async fn has(&self, id: &CredentialId) -> ServiceResult<bool> {
        Ok(self.ctx.credential_repo().exists(id).await?)
    }

    /// Remove the credential for `id`; removing an unknown id is a no-op
    #[instrument(skip_all, fields(id = %id))]
    pub async fn delete(&self, id: &CredentialId) -> ServiceResult<()> {
        let removed = self.ctx.credential_repo().delete(id).await?;

        if removed {
            info!("Credential deleted");
        } else {
            debug!("Delete of unknown id ignored");
        }
        Ok(())
    }

    /// Check `password` against the stored hash for `id`
    ///
    /// Returns `false` for an unknown id after the same amount of hashing work
    /// as a wrong password. A successful check against a hash made with
    /// outdated parameters upgrades the stored hash, unless the credential was
    /// changed or deleted in the meantime.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn verify(&self, id: &CredentialId, password: &str) -> ServiceResult<bool> {
        let hasher = self.ctx.password_service().clone();
        let password = password.to_owned();

        let Some(credential) = self.ctx.credential_repo().find_by_id(id).await? else {
            run_blocking(move || hasher.verify_missing(&password)).await?;
            debug!("Verification failed: unknown id");
            return Ok(false);
        };

        let stored = credential.password_hash;
        let (valid, upgraded) = {
            let stored = stored.clone();
            run_blocking(move || {
                if !hasher.verify(&password, &stored) {
                    return (false, None);
                }
                if !hasher.needs_rehash(&stored) {
                    return (true, None);
                }
                match hasher.hash(&password) {
                    Ok(hash) => (true, Some(hash)),
                    Err(e) => {
                        warn!(error = %e, "Rehash failed, keeping stored hash");
                        (true, None)
                    }
                }
            })
            .await?
        };

        if !valid {
            debug!("Verification failed: password mismatch");
            return Ok(false);
        }

        if let Some(replacement) = upgraded {
            self.upgrade_hash(id, &stored, &replacement).await;
        }

        Ok(true)
    }

    /// Like [`verify`](Self::verify) for an unparsed id, but a mismatch is an error
    ///
    /// An id that could never be stored (empty or too long) is treated as
    /// unknown, including the hashing work.
    ///
    /// # Errors
    /// `AppError::InvalidCredentials` when the id is unknown or the password is wrong
    pub async fn authenticate(&self, raw_id: &str, password: &str) -> ServiceResult<()> {
        let valid = match CredentialId::parse(raw_id) {
            Ok(id) => self.verify(&id, password).await?,
            Err(e) => {
                let hasher = self.ctx.password_service().clone();
                let password = password.to_owned();
                run_blocking(move || hasher.verify_missing(&password)).await?;
                debug!(reason = %e, "Verification failed: unusable id");
                false
            }
        };

        if valid {
            Ok(())
        } else {
            Err(ServiceError::invalid_credentials())
        }
    }

    async fn upgrade_hash(&self, id: &CredentialId, current: &str, replacement: &str) {
        match self
            .ctx
            .credential_repo()
            .replace_hash(id, current, replacement)
            .await
        {
            Ok(true) => info!("Password hash upgraded to current parameters"),
            Ok(false) => debug!("Credential changed concurrently, hash upgrade skipped"),
            Err(e) => warn!(error = %e, "Hash upgrade failed"),
        }
    }
}

async fn run_blocking<T, F>(f: F) -> ServiceResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ServiceError::internal(format!("Hashing task failed: {e}")))
}
