//! Token service
//!
//! Issues and checks signed tokens carrying caller-supplied claims.

use auth_common::auth::Claims;
use auth_common::AppError;
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Token service
pub struct TokenService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TokenService<'a> {
    /// Create a new TokenService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign `claims` into a token
    #[instrument(skip_all, fields(claims = claims.len()))]
    pub fn encode(&self, claims: &Claims) -> ServiceResult<String> {
        Ok(self.ctx.jwt_service().encode_claims(claims)?)
    }

    /// Check a token's signature and expiry and return its claims
    #[instrument(skip_all)]
    pub fn verify(&self, token: &str) -> ServiceResult<Claims> {
        self.ctx.jwt_service().decode_claims(token).map_err(|e| {
            match &e {
                AppError::TokenExpired => info!("Token rejected: expired"),
                other => warn!(code = other.error_code(), "Token rejected"),
            }
            e.into()
        })
    }
}
