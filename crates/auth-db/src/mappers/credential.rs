//! Credential entity <-> model mapper

use auth_core::entities::Credential;
use auth_core::error::DomainError;
use auth_core::value_objects::CredentialId;

use crate::models::CredentialModel;

/// Convert CredentialModel to Credential entity
///
/// Fails only if a row holds an id the domain would reject, which means the
/// table was written to outside this service.
impl TryFrom<CredentialModel> for Credential {
    type Error = DomainError;

    fn try_from(model: CredentialModel) -> Result<Self, Self::Error> {
        Ok(Credential {
            id: CredentialId::parse(model.id)?,
            password_hash: model.password_hash,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
