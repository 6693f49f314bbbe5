//! # auth-common
//!
//! Shared utilities including configuration, error handling, password hashing,
//! token signing, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, JwtService, PasswordService};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, HashingConfig,
    JwtConfig, ServerConfig, StorageBackend, StorageConfig,
};
pub use error::AppError;
pub use telemetry::{init_tracing, TracingConfig, TracingError};
