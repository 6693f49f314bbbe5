//! Middleware stack for the API server
//!
//! Provides logging, request ID generation, CORS, and request timeouts.

use auth_common::CorsConfig;
use axum::{
    body::Body,
    http::{header::HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Upper bound on request handling time
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn request_id_header() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

/// Apply the middleware stack with configured CORS
///
/// Request path: RequestID -> Trace -> Timeout -> CORS -> Handler
pub fn apply_middleware(
    router: Router<AppState>,
    cors_config: &CorsConfig,
    is_production: bool,
) -> Router<AppState> {
    let trace = TraceLayer::new_for_http()
        .make_span_with(request_span)
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Last added runs first
    router
        .layer(create_cors_layer(cors_config, is_production))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        .layer(trace)
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid))
}

/// Span for one HTTP request
///
/// Records the path only: `/auth/jwt/verify` carries the token in its query.
fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            request_id_header(),
        ])
        .expose_headers([request_id_header()])
        .allow_origin(allowed_origins(config, is_production))
}

/// Origin policy: any origin only in development with nothing configured
fn allowed_origins(config: &CorsConfig, is_production: bool) -> AllowOrigin {
    if config.allowed_origins.is_empty() {
        if is_production {
            tracing::warn!("CORS: no origins configured in production; browser requests will fail");
            return AllowOrigin::list(Vec::<HeaderValue>::new());
        }
        tracing::warn!("CORS: allowing any origin, set CORS_ALLOWED_ORIGINS to restrict");
        return Any.into();
    }

    let origins = parse_origins(&config.allowed_origins);
    tracing::info!(count = origins.len(), "CORS: allowing configured origins");
    AllowOrigin::list(origins)
}

fn parse_origins(raw: &[String]) -> Vec<HeaderValue> {
    raw.iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}
