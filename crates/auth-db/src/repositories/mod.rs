//! Repository implementations
//!
//! Implementations of the repository trait defined in auth-core, one per
//! storage backend.

mod credential;
mod error;
mod memory;

pub use credential::PgCredentialRepository;
pub use memory::MemoryCredentialRepository;
