//! Credential ID - the unique key a credential is stored under
//!
//! Ids are opaque caller-chosen strings. The only constraints are that they
//! are non-empty and fit the storage column (255 bytes).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Unique key of a stored credential
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CredentialId(String);

impl CredentialId {
    /// Maximum id length in bytes
    pub const MAX_LEN: usize = 255;

    /// Parse and validate a credential id
    ///
    /// # Errors
    /// Returns an error if the id is empty or longer than [`Self::MAX_LEN`] bytes
    pub fn parse(s: impl Into<String>) -> Result<Self, CredentialIdError> {
        let s = s.into();
        if s.is_empty() {
            return Err(CredentialIdError::Empty);
        }
        if s.len() > Self::MAX_LEN {
            return Err(CredentialIdError::TooLong(s.len()));
        }
        Ok(Self(s))
    }

    /// Borrow the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CredentialId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for CredentialId {
    type Err = CredentialIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CredentialId {
    type Error = CredentialIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for CredentialId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CredentialId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(s).map_err(serde::de::Error::custom)
    }
}

/// Error when a credential id fails validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialIdError {
    #[error("Credential id must not be empty")]
    Empty,

    #[error("Credential id is {0} bytes, max 255")]
    TooLong(usize),
}
