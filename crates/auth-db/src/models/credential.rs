//! Credential database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for credentials table
#[derive(Debug, Clone, FromRow)]
pub struct CredentialModel {
    pub id: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
