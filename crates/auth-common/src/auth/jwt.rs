//! JWT utilities for token issuance
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken` crate.
//! Tokens are HS256-signed and carry an arbitrary JSON object as their payload.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::JwtConfig;
use crate::error::AppError;

/// Claim name for the expiry timestamp added on encode
pub const EXPIRY_CLAIM: &str = "exp";

/// Token payload: an arbitrary JSON object
///
/// The service does not interpret the payload beyond the `exp` claim it
/// manages itself. Everything else, registered claims included, round-trips.
pub type Claims = Map<String, Value>;

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
    leeway: u64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and token lifetime in seconds
    ///
    /// A lifetime of zero or less issues tokens without an `exp` claim.
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
            leeway: 0,
        }
    }

    /// Create a JWT service from configuration
    #[must_use]
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.secret, config.token_expiry).with_leeway(config.leeway)
    }

    /// Set the clock skew tolerated when checking `exp`, in seconds
    #[must_use]
    pub fn with_leeway(mut self, leeway: u64) -> Self {
        self.leeway = leeway;
        self
    }

    /// Token lifetime in seconds (zero or less means no expiry)
    #[must_use]
    pub fn token_expiry(&self) -> i64 {
        self.token_expiry
    }

    fn expires(&self) -> bool {
        self.token_expiry > 0
    }

    /// Sign a claims payload
    ///
    /// A caller-supplied `exp` is replaced; every other claim is signed as given.
    ///
    /// # Errors
    /// - `AppError::Config` if the configured lifetime overflows the clock
    /// - `AppError::Internal` if token encoding fails
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AppError> {
        let mut payload = claims.clone();

        if self.expires() {
            let exp = TimeDelta::try_seconds(self.token_expiry)
                .and_then(|ttl| Utc::now().checked_add_signed(ttl))
                .ok_or_else(|| {
                    let ttl = self.token_expiry;
                    AppError::Config(format!("token expiry {ttl}s is out of range"))
                })?;
            payload.insert(EXPIRY_CLAIM.to_string(), Value::from(exp.timestamp()));
        } else {
            payload.remove(EXPIRY_CLAIM);
        }

        encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a token, returning the claims as originally signed
    ///
    /// The signature and the expiry are checked independently; both must pass.
    ///
    /// # Errors
    /// - `AppError::MalformedToken` if the token cannot be split or decoded
    /// - `AppError::TokenExpired` if `exp` has elapsed
    /// - `AppError::InvalidToken` for any other failure (bad signature, wrong algorithm)
    pub fn decode_claims(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation()).map_err(|e| {
                debug!(kind = ?e.kind(), "JWT rejected");
                match e.kind() {
                    ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    ErrorKind::InvalidToken
                    | ErrorKind::Base64(_)
                    | ErrorKind::Json(_)
                    | ErrorKind::Utf8(_) => AppError::MalformedToken,
                    _ => AppError::InvalidToken,
                }
            })?;

        let mut claims = token_data.claims;
        claims.remove(EXPIRY_CLAIM);

        Ok(claims)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway;
        // `aud` is caller payload here, not an audience to enforce
        validation.validate_aud = false;
        if !self.expires() {
            // `exp` is still checked when present
            validation.required_spec_claims.clear();
        }
        validation
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .field("leeway", &self.leeway)
            .finish_non_exhaustive()
    }
}
