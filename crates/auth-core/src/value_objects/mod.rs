//! Value objects - immutable types that represent domain concepts

mod credential_id;

pub use credential_id::{CredentialId, CredentialIdError};
