//! # auth-db
//!
//! Storage layer implementing [`auth_core::CredentialRepository`].
//!
//! ## Overview
//!
//! Two interchangeable backends are provided:
//!
//! - [`MemoryCredentialRepository`]: a sharded concurrent map, used by default
//!   and in tests
//! - [`PgCredentialRepository`]: PostgreSQL via SQLx, for durable storage
//!
//! ## Usage
//!
//! ```rust,ignore
//! use auth_db::{create_pool, ensure_schema, PgCredentialRepository, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from_env()).await?;
//!     ensure_schema(&pool).await?;
//!     let repo = PgCredentialRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, PgPool, PoolConfig};
pub use repositories::{MemoryCredentialRepository, PgCredentialRepository};
pub use schema::ensure_schema;
