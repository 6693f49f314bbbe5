//! Domain entities - core business objects

mod credential;

pub use credential::Credential;
