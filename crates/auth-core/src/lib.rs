//! # auth-core
//!
//! Domain layer containing the credential entity, value objects, and the
//! repository trait implemented by the storage backends.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::Credential;
pub use error::DomainError;
pub use traits::{CredentialRepository, RepoResult};
pub use value_objects::{CredentialId, CredentialIdError};
