//! Token handlers

use auth_common::Claims;
use auth_service::dto::TokenQuery;
use auth_service::TokenService;
use axum::{extract::State, Json};

use crate::extractors::{JsonBody, QueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// Sign a JSON object; the token is returned as plain text
///
/// POST /auth/jwt/encode
pub async fn encode(
    State(state): State<AppState>,
    JsonBody(claims): JsonBody<Claims>,
) -> ApiResult<String> {
    let service = TokenService::new(state.service_context());
    Ok(service.encode(&claims)?)
}

/// Verify a token and return its claims
///
/// GET /auth/jwt/verify?token=
pub async fn verify(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<TokenQuery>,
) -> ApiResult<Json<Claims>> {
    let service = TokenService::new(state.service_context());
    Ok(Json(service.verify(&query.token)?))
}
