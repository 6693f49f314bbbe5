//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

/// Get a unique credential id so tests never share state
pub fn unique_id() -> String {
    format!("user-{}", Uuid::new_v4().simple())
}

/// Body of `/auth/save` and `/auth/verify`
#[derive(Debug, Clone, Serialize)]
pub struct CredentialRequest {
    pub id: String,
    pub password: String,
}

impl CredentialRequest {
    pub fn new(id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            password: password.into(),
        }
    }

    pub fn unique() -> Self {
        Self::new(unique_id(), "TestPass123!")
    }

    /// Same id with a different password
    pub fn with_password(&self, password: impl Into<String>) -> Self {
        Self::new(self.id.clone(), password)
    }
}

/// Flat claims object accepted by `/auth/jwt/encode`
pub fn sample_claims() -> Value {
    json!({
        "id": "123",
        "password": "123",
    })
}

/// Claims with nested values and a caller-supplied `exp`
pub fn rich_claims() -> Value {
    json!({
        "sub": unique_id(),
        "exp": 1,
        "roles": ["admin", "reader"],
        "profile": { "name": "Test User", "age": 42 },
        "active": true,
    })
}

/// Path for verifying `token`
pub fn token_query(token: &str) -> String {
    // Base64url and dots are query-safe
    format!("/auth/jwt/verify?token={token}")
}
