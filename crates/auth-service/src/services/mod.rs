//! Business logic services
//!
//! Services borrow a [`ServiceContext`] and orchestrate hashing, storage,
//! and token signing for a single request.

pub mod context;
pub mod credential;
pub mod error;
pub mod token;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use credential::CredentialService;
pub use error::{ServiceError, ServiceResult};
pub use token::TokenService;
