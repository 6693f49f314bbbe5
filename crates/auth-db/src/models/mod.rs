//! Database models with SQLx `FromRow` derives

mod credential;

pub use credential::CredentialModel;
