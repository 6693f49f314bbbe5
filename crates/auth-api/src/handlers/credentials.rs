//! Credential handlers
//!
//! Endpoints for storing, checking, and removing id/password pairs.

use auth_service::dto::{AuthRequest, IdQuery, OK};
use auth_service::CredentialService;
use axum::{extract::State, Json};

use crate::extractors::{JsonBody, ValidatedJson, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Store a credential, replacing any existing one for the id
///
/// POST /auth/save
pub async fn save(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AuthRequest>,
) -> ApiResult<Json<&'static str>> {
    let id = request.credential_id()?;
    let service = CredentialService::new(state.service_context());
    service.save(&id, &request.password).await?;
    Ok(Json(OK))
}

/// Check a password
///
/// POST /auth/verify
///
/// Ids that fail validation are rejected like unknown ids, with 401.
pub async fn verify(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AuthRequest>,
) -> ApiResult<Json<&'static str>> {
    let service = CredentialService::new(state.service_context());
    service.authenticate(&request.id, &request.password).await?;
    Ok(Json(OK))
}

/// Report whether a credential exists
///
/// GET /auth/has?id=
pub async fn has(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<IdQuery>,
) -> ApiResult<Json<bool>> {
    let id = query.credential_id()?;
    let service = CredentialService::new(state.service_context());
    Ok(Json(service.has(&id).await?))
}

/// Remove a credential; unknown ids succeed too
///
/// POST /auth/delete?id=
pub async fn delete(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<IdQuery>,
) -> ApiResult<Json<&'static str>> {
    let id = query.credential_id()?;
    let service = CredentialService::new(state.service_context());
    service.delete(&id).await?;
    Ok(Json(OK))
}
