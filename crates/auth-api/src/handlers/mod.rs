//! Route handlers
//!
//! All HTTP request handlers organized by concern.

pub mod credentials;
pub mod health;
pub mod tokens;
