//! PostgreSQL implementation of CredentialRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use auth_core::entities::Credential;
use auth_core::traits::{CredentialRepository, RepoResult};
use auth_core::value_objects::CredentialId;

use crate::models::CredentialModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CredentialRepository
///
/// Each method is a single statement, so per-id atomicity comes from the
/// row lock PostgreSQL takes for that statement.
#[derive(Clone)]
pub struct PgCredentialRepository {
    pool: PgPool,
}

impl PgCredentialRepository {
    /// Create a new PgCredentialRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for PgCredentialRepository {
    #[instrument(skip(self, password_hash))]
    async fn upsert(&self, id: &CredentialId, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO credentials (id, password_hash, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            ON CONFLICT (id) DO UPDATE
            SET password_hash = EXCLUDED.password_hash, updated_at = NOW()
            ",
        )
        .bind(id.as_str())
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &CredentialId) -> RepoResult<Option<Credential>> {
        let result = sqlx::query_as::<_, CredentialModel>(
            r"
            SELECT id, password_hash, created_at, updated_at
            FROM credentials
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Credential::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: &CredentialId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM credentials WHERE id = $1)
            ",
        )
        .bind(id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &CredentialId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM credentials WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, current, replacement))]
    async fn replace_hash(
        &self,
        id: &CredentialId,
        current: &str,
        replacement: &str,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE credentials
            SET password_hash = $3, updated_at = NOW()
            WHERE id = $1 AND password_hash = $2
            ",
        )
        .bind(id.as_str())
        .bind(current)
        .bind(replacement)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM credentials")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count as u64)
    }

    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
