//! Password hashing and verification utilities
//!
//! Uses Argon2id for secure password hashing (OWASP recommended). Hashes are
//! stored as PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`), which
//! carry the algorithm, version, cost parameters, and salt alongside the digest.

use std::sync::{Arc, OnceLock};

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use tracing::warn;

use crate::config::HashingConfig;
use crate::error::AppError;

/// Password service for dependency injection
///
/// Cloning is cheap; clones share the lazily computed dummy hash.
#[derive(Clone)]
pub struct PasswordService {
    argon2: Argon2<'static>,
    dummy_hash: Arc<OnceLock<Option<String>>>,
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService {
    /// Create a password service with the argon2 crate's default parameters
    #[must_use]
    pub fn new() -> Self {
        Self::from_params(Params::default())
    }

    /// Create a password service from configured cost parameters
    ///
    /// # Errors
    /// Returns `AppError::Config` if the parameters are out of range
    pub fn with_config(config: &HashingConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| AppError::Config(format!("Invalid Argon2 parameters: {e}")))?;

        Ok(Self::from_params(params))
    }

    fn from_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            dummy_hash: Arc::new(OnceLock::new()),
        }
    }

    /// Hash a password with a fresh random salt
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
    }

    /// Verify a password against a stored hash
    ///
    /// The digest comparison is constant-time. A stored hash that cannot be
    /// parsed is treated as a mismatch.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Stored password hash is malformed");
                return false;
            }
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Burn one verification's worth of work for an id that has no credential
    ///
    /// Keeps the latency of a failed lookup in line with a wrong password.
    pub fn verify_missing(&self, password: &str) -> bool {
        let dummy = self
            .dummy_hash
            .get_or_init(|| self.hash("dummy-password-for-timing").ok());

        if let Some(hash) = dummy {
            let _ = self.verify(password, hash);
        }
        false
    }

    /// Check whether a stored hash was produced with different settings
    ///
    /// Malformed hashes are not reported here; they fail verification instead.
    pub fn needs_rehash(&self, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };

        if parsed.algorithm != Algorithm::Argon2id.ident() {
            return true;
        }
        if parsed.version != Some(Version::V0x13.into()) {
            return true;
        }

        let Ok(stored) = Params::try_from(&parsed) else {
            return true;
        };
        let current = self.argon2.params();

        stored.m_cost() != current.m_cost()
            || stored.t_cost() != current.t_cost()
            || stored.p_cost() != current.p_cost()
    }
}

impl std::fmt::Debug for PasswordService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self.argon2.params();
        f.debug_struct("PasswordService")
            .field("m_cost", &params.m_cost())
            .field("t_cost", &params.t_cost())
            .field("p_cost", &params.p_cost())
            .finish_non_exhaustive()
    }
}
