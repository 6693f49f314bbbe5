//! Table definitions for the PostgreSQL backend

use sqlx::PgPool;
use tracing::info;

/// DDL for the credentials table
pub const CREATE_CREDENTIALS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS credentials (
    id            VARCHAR(255) PRIMARY KEY,
    password_hash TEXT         NOT NULL,
    created_at    TIMESTAMPTZ  NOT NULL DEFAULT NOW(),
    updated_at    TIMESTAMPTZ  NOT NULL DEFAULT NOW()
)
";

/// Create the tables used by the repositories if they do not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_CREDENTIALS_TABLE).execute(pool).await?;
    info!("Credential schema ready");
    Ok(())
}
