//! API Integration Tests
//!
//! Each test starts its own server on an ephemeral port, backed by the
//! in-memory credential store. No external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use futures::future::join_all;
use integration_tests::{
    assert_error_code, assert_json, assert_status, assert_text, fixtures::*, test_config,
    TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["storage"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Credential Tests
// ============================================================================

#[tokio::test]
async fn test_credential_lifecycle() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creds = CredentialRequest::new("123", "123");

    // Unknown id
    let response = server.post("/auth/verify", &creds).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.post("/auth/save", &creds).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!("ok"));

    let response = server.post("/auth/verify", &creds).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!("ok"));

    let response = server.get("/auth/has?id=123").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!(true));

    let response = server.post_empty("/auth/delete?id=123").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!("ok"));

    let response = server.post("/auth/verify", &creds).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_verify_wrong_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creds = CredentialRequest::unique();

    let response = server.post("/auth/save", &creds).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post("/auth/verify", &creds.with_password("WrongPass!"))
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_wrong_password_and_unknown_id_look_the_same() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creds = CredentialRequest::unique();
    server.post("/auth/save", &creds).await.unwrap();

    let wrong = server
        .post("/auth/verify", &creds.with_password("nope"))
        .await
        .unwrap();
    let unknown = server
        .post("/auth/verify", &CredentialRequest::unique())
        .await
        .unwrap();

    let wrong: Value = assert_json(wrong, StatusCode::UNAUTHORIZED).await.unwrap();
    let unknown: Value = assert_json(unknown, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(wrong, unknown);
}

#[tokio::test]
async fn test_save_overwrites_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let first = CredentialRequest::unique();
    let second = first.with_password("AnotherPass456!");

    server.post("/auth/save", &first).await.unwrap();
    let response = server.post("/auth/save", &second).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post("/auth/verify", &first).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.post("/auth/verify", &second).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_save_is_idempotent() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creds = CredentialRequest::unique();

    for _ in 0..2 {
        let response = server.post("/auth/save", &creds).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.post("/auth/verify", &creds).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_has_unknown_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let path = format!("/auth/has?id={}", unique_id());

    let response = server.get(&path).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!(false));
}

#[tokio::test]
async fn test_delete_unknown_id_is_ok() {
    let server = TestServer::start().await.expect("Failed to start server");
    let path = format!("/auth/delete?id={}", unique_id());

    for _ in 0..2 {
        let response = server.post_empty(&path).await.unwrap();
        let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body, json!("ok"));
    }
}

#[tokio::test]
async fn test_invalid_credential_input() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/auth/save", &CredentialRequest::new("", "pw"))
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(code, "VALIDATION_ERROR");

    let response = server
        .post("/auth/save", &CredentialRequest::new("x".repeat(256), "pw"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_raw("/auth/save", "application/json", "{not json")
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(code, "INVALID_BODY");

    let response = server.get("/auth/has").await.unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(code, "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_verify_unusable_id_is_unauthorized() {
    let server = TestServer::start().await.expect("Failed to start server");

    for id in [String::new(), "x".repeat(256)] {
        let response = server
            .post("/auth/verify", &CredentialRequest::new(id, "pw"))
            .await
            .unwrap();
        let code = assert_error_code(response, StatusCode::UNAUTHORIZED)
            .await
            .unwrap();
        assert_eq!(code, "INVALID_CREDENTIALS");
    }
}

#[tokio::test]
async fn test_concurrent_saves_for_distinct_ids() {
    let server = TestServer::start().await.expect("Failed to start server");
    let requests: Vec<CredentialRequest> = (0..16).map(|_| CredentialRequest::unique()).collect();

    let saves = requests.iter().map(|creds| server.post("/auth/save", creds));
    for response in join_all(saves).await {
        assert_status(response.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    }

    for creds in &requests {
        let response = server.post("/auth/verify", creds).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
}

#[tokio::test]
async fn test_servers_do_not_share_memory_store() {
    let first = TestServer::start().await.expect("Failed to start server");
    let second = TestServer::start().await.expect("Failed to start server");
    let creds = CredentialRequest::unique();

    first.post("/auth/save", &creds).await.unwrap();

    let response = second.post("/auth/verify", &creds).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Token Tests
// ============================================================================

#[tokio::test]
async fn test_token_round_trip() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/auth/jwt/encode", &sample_claims())
        .await
        .unwrap();
    let token = assert_text(response, StatusCode::OK).await.unwrap();
    assert_eq!(token.split('.').count(), 3);

    let response = server.get(&token_query(&token)).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, sample_claims());
}

#[tokio::test]
async fn test_token_preserves_nested_claims() {
    let server = TestServer::start().await.expect("Failed to start server");
    let claims = rich_claims();

    let response = server.post("/auth/jwt/encode", &claims).await.unwrap();
    let token = assert_text(response, StatusCode::OK).await.unwrap();

    let response = server.get(&token_query(&token)).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    // The supplied `exp` is replaced at signing and stripped on verify
    let mut expected = claims;
    if let Some(map) = expected.as_object_mut() {
        map.remove("exp");
    }
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_token_keeps_caller_iat_and_aud() {
    let server = TestServer::start().await.expect("Failed to start server");
    let claims = json!({ "id": "1", "iat": 5, "aud": "billing" });

    let response = server.post("/auth/jwt/encode", &claims).await.unwrap();
    let token = assert_text(response, StatusCode::OK).await.unwrap();

    let response = server.get(&token_query(&token)).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, claims);
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/auth/jwt/encode", &sample_claims())
        .await
        .unwrap();
    let token = assert_text(response, StatusCode::OK).await.unwrap();

    // Swap in a payload the signature was not computed over
    let mut parts: Vec<&str> = token.split('.').collect();
    let forged = "eyJpZCI6ImFkbWluIn0";
    parts[1] = forged;
    let tampered = parts.join(".");

    let response = server.get(&token_query(&tampered)).await.unwrap();
    let code = assert_error_code(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(code, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_token_from_other_secret_is_rejected() {
    let issuer = TestServer::start().await.expect("Failed to start server");

    let mut config = test_config();
    config.jwt.secret = "a-different-secret".to_string();
    let verifier = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");

    let response = issuer
        .post("/auth/jwt/encode", &sample_claims())
        .await
        .unwrap();
    let token = assert_text(response, StatusCode::OK).await.unwrap();

    let response = verifier.get(&token_query(&token)).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get(&token_query("not-a-token")).await.unwrap();
    let code = assert_error_code(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(code, "MALFORMED_TOKEN");

    let response = server.get("/auth/jwt/verify").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_encode_rejects_non_object_claims() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/auth/jwt/encode", &json!(["id", "123"]))
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(code, "INVALID_BODY");
}
