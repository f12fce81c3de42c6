mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;
use web::config::AuthConfig;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_config(server: &MockServer) -> AuthConfig {
    AuthConfig {
        domain: Some(server.uri()),
        client_id: Some("client-123".to_string()),
        client_secret: Some("secret-456".to_string()),
        callback_url: "http://localhost:5173/callback".to_string(),
    }
}

#[tokio::test]
async fn test_successful_exchange_is_relayed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_partial_json(json!({
            "client_id": "client-123",
            "client_secret": "secret-456",
            "code": "abc",
            "grant_type": "authorization_code",
            "redirect_uri": "http://localhost:5173/callback",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at",
            "id_token": "it",
            "token_type": "Bearer",
            "expires_in": 86400,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = TestApp::with_auth(provider_config(&server)).await;
    let (status, body) = app.post("/api/auth/token", json!({"code": "abc"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["access_token"], "at");
    assert_eq!(body["expires_in"], 86400);
}

#[tokio::test]
async fn test_redirect_uri_override_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_partial_json(json!({"redirect_uri": "https://app.example.com/cb"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "at"})))
        .expect(1)
        .mount(&server)
        .await;

    let app = TestApp::with_auth(provider_config(&server)).await;
    let (status, _) = app
        .post(
            "/api/auth/token",
            json!({"code": "abc", "redirect_uri": "https://app.example.com/cb"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_provider_rejection_is_400() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid authorization code",
        })))
        .mount(&server)
        .await;

    let app = TestApp::with_auth(provider_config(&server)).await;
    let (status, body) = app.post("/api/auth/token", json!({"code": "stale"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Auth0 token exchange failed: Invalid authorization code"
    );
}

#[tokio::test]
async fn test_undecodable_success_is_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let app = TestApp::with_auth(provider_config(&server)).await;
    let (status, body) = app.post("/api/auth/token", json!({"code": "abc"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Token exchange failed");
}

#[tokio::test]
async fn test_missing_code_is_400() {
    let server = MockServer::start().await;
    let app = TestApp::with_auth(provider_config(&server)).await;

    let (status, body) = app.post("/api/auth/token", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Authorization code is required");

    let (status, _) = app.post("/api/auth/token", json!({"code": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unconfigured_provider() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/api/auth/token", json!({"code": "abc"})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Missing Auth0 environment variables: AUTH0_DOMAIN")
    );

    let (status, health) = app.get("/api/auth/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "unhealthy");
    assert!(health["error"].is_string());
}

#[tokio::test]
async fn test_health_when_configured() {
    let server = MockServer::start().await;
    let app = TestApp::with_auth(provider_config(&server)).await;

    let (status, health) = app.get("/api/auth/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["auth0_domain"], server.uri());
    assert!(health.get("error").is_none());
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = TestApp::new().await;

    let (status, doc) = app.get("/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/history"].is_object());
    assert!(doc["paths"]["/api/mentees/accept-invitation/{invite_key}"].is_object());
}
