use axum::http::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use nomnom_testing::auth::MockAuth;

use crate::helpers::setup;

fn user_json() -> Value {
    json!({
        "id": "5f7d9a40-0000-4000-8000-00000000000a",
        "email": "rui@example.com",
        "created_at": "2025-10-01T12:00:00.5Z",
        "user_metadata": { "name": "Rui" }
    })
}

#[tokio::test]
async fn should_login_with_metadata_name() {
    let (platform, server) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access",
            "refresh_token": "refresh",
            "expires_in": 3600,
            "token_type": "bearer",
            "user": user_json()
        })))
        .mount(&platform)
        .await;

    let resp = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "rui@example.com", "password": "secret1" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["user"]["name"], "Rui");
    assert_eq!(body["user"]["created_at"], "2025-10-01T12:00:00.500Z");
    assert_eq!(body["token_type"], "bearer");
    assert!(body.get("profile_complete").is_none());
}

#[tokio::test]
async fn should_return_401_for_wrong_password() {
    let (platform, server) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 400,
            "error_code": "invalid_credentials",
            "msg": "Invalid login credentials"
        })))
        .mount(&platform)
        .await;

    let resp = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "rui@example.com", "password": "nope-nope" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json::<Value>()["message"], "Email ou senha incorretos");
}

#[tokio::test]
async fn should_require_bearer_on_me() {
    let (_platform, server) = setup().await;
    let resp = server.get("/api/v1/auth/me").await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_return_current_user() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&platform)
        .await;

    let (name, value) = MockAuth::default().header();
    let resp = server.get("/api/v1/auth/me").add_header(name, value).await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>()["email"], "rui@example.com");
}
