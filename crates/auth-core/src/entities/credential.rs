//! Credential entity - an id paired with a password hash

use chrono::{DateTime, Utc};

use crate::value_objects::CredentialId;

/// A stored credential
///
/// `password_hash` is an opaque, self-describing string (PHC format). The
/// domain never inspects it; hashing and verification live in `auth-common`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub id: CredentialId,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    /// Create a new credential stamped with the current time
    pub fn new(id: CredentialId, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}
