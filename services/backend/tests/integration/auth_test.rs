use axum::http::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use nomnom_testing::auth::{MockAuth, TEST_ACCESS_TOKEN};
use nomnom_testing::platform::rest_path;

use crate::helpers::setup;

fn user_json() -> Value {
    json!({
        "id": "0b7c5b0e-5a34-4a4e-9a59-1f0c2d8e6a11",
        "email": "ana@example.com",
        "created_at": "2025-11-03T09:30:00Z",
        "user_metadata": { "name": "Ana" }
    })
}

fn session_json() -> Value {
    json!({
        "access_token": "access",
        "refresh_token": "refresh",
        "expires_in": 3600,
        "token_type": "bearer",
        "user": user_json()
    })
}

// ── register ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_and_create_utilizador() {
    let (platform, server) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(body_partial_json(json!({ "email": "ana@example.com", "data": { "name": "Ana" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_json()))
        .expect(1)
        .mount(&platform)
        .await;
    Mock::given(method("POST"))
        .and(path(rest_path("Utilizador")))
        .and(body_partial_json(json!({ "email": "ana@example.com", "nome": "Ana" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!([{ "email": "ana@example.com", "nome": "Ana" }])),
        )
        .expect(1)
        .mount(&platform)
        .await;

    let resp = server
        .post("/api/v1/auth/register")
        .json(&json!({ "email": "ana@example.com", "password": "secret1", "name": "Ana" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::CREATED);
    let body: Value = resp.json();
    assert_eq!(body["access_token"], "access");
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["profile_complete"], false);
    assert_eq!(body["user"]["name"], "Ana");
    assert_eq!(body["user"]["created_at"], "2025-11-03T09:30:00.000Z");
}

#[tokio::test]
async fn should_return_409_for_existing_email() {
    let (platform, server) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "code": 422,
            "error_code": "user_already_exists",
            "msg": "User already registered"
        })))
        .mount(&platform)
        .await;

    let resp = server
        .post("/api/v1/auth/register")
        .json(&json!({ "email": "ana@example.com", "password": "secret1", "name": "Ana" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::CONFLICT);
    assert_eq!(resp.json::<Value>()["kind"], "EMAIL_ALREADY_REGISTERED");
}

#[tokio::test]
async fn should_return_429_when_sign_up_is_rate_limited() {
    let (platform, server) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "code": 429,
            "error_code": "over_email_send_rate_limit",
            "msg": "email rate limit exceeded"
        })))
        .mount(&platform)
        .await;

    let resp = server
        .post("/api/v1/auth/signup")
        .json(&json!({ "email": "ana@example.com", "password": "secret1", "name": "Ana" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::TOO_MANY_REQUESTS);
}

// ── login ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_with_complete_profile() {
    let (platform, server) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_json()))
        .mount(&platform)
        .await;
    Mock::given(method("GET"))
        .and(path(rest_path("Utilizador")))
        .and(query_param("email", "eq.ana@example.com"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "email": "ana@example.com", "nome": "Ana Maria", "peso": 60 }])),
        )
        .mount(&platform)
        .await;

    let resp = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "ana@example.com", "password": "secret1" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["profile_complete"], true);
    assert_eq!(body["user"]["name"], "Ana Maria");
    assert_eq!(body["message"], "Login realizado com sucesso");
}

#[tokio::test]
async fn should_return_401_for_bad_credentials() {
    let (platform, server) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&platform)
        .await;

    let resp = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "ana@example.com", "password": "wrong-pass" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_CREDENTIALS");
}

// ── me / logout ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_401_without_bearer() {
    let (_platform, server) = setup().await;
    let resp = server.get("/api/v1/auth/me").await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json::<Value>()["kind"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn should_return_401_for_rejected_token() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "error_code": "bad_jwt",
            "msg": "invalid JWT"
        })))
        .mount(&platform)
        .await;

    let (name, value) = MockAuth::new("expired").header();
    let resp = server.get("/api/v1/auth/me").add_header(name, value).await;

    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_TOKEN");
}

#[tokio::test]
async fn should_return_current_user() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", format!("Bearer {TEST_ACCESS_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&platform)
        .await;

    let (name, value) = MockAuth::default().header();
    let resp = server.get("/api/v1/auth/me").add_header(name, value).await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["email"], "ana@example.com");
    assert_eq!(body["name"], "Ana");
}

#[tokio::test]
async fn should_logout_without_token() {
    let (_platform, server) = setup().await;
    let resp = server.post("/api/v1/auth/logout").await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>()["message"], "Logout realizado com sucesso");
}

#[tokio::test]
async fn should_revoke_session_on_logout() {
    let (platform, server) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&platform)
        .await;

    let (name, value) = MockAuth::default().header();
    let resp = server.post("/api/v1/auth/logout").add_header(name, value).await;

    assert_eq!(resp.status_code(), StatusCode::OK);
}

// ── profile updates ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_picture_in_metadata() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&platform)
        .await;
    let mut updated = user_json();
    updated["user_metadata"]["avatar_url"] = json!("https://img.example.com/ana.png");
    Mock::given(method("PUT"))
        .and(path("/auth/v1/admin/users/0b7c5b0e-5a34-4a4e-9a59-1f0c2d8e6a11"))
        .and(body_partial_json(json!({
            "user_metadata": { "avatar_url": "https://img.example.com/ana.png" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&platform)
        .await;

    let (name, value) = MockAuth::default().header();
    let resp = server
        .patch("/api/v1/auth/me/picture")
        .add_header(name, value)
        .json(&json!({ "url": "https://img.example.com/ana.png" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>()["avatar_url"], "https://img.example.com/ana.png");
}
