use axum::http::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use nomnom_testing::platform::rest_path;

use crate::helpers::setup;

fn profile(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{}@example.com", name.to_lowercase()),
        "name": name,
        "created_at": "2025-10-01T12:00:00Z"
    })
}

// ── POST /accounts ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_account() {
    let (platform, server) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(body_partial_json(json!({ "email": "rui@example.com", "data": { "name": "Rui" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "acc-1",
            "email": "rui@example.com",
            "created_at": "2025-10-01T12:00:00Z",
            "user_metadata": { "name": "Rui" }
        })))
        .expect(1)
        .mount(&platform)
        .await;

    let resp = server
        .post("/api/v1/accounts")
        .json(&json!({ "name": "Rui", "email": "rui@example.com", "password": "secret1" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::CREATED);
    let body: Value = resp.json();
    assert_eq!(body["id"], "acc-1");
    assert_eq!(body["name"], "Rui");
}

#[tokio::test]
async fn should_return_409_for_registered_email() {
    let (platform, server) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "code": 422,
            "error_code": "email_exists",
            "msg": "User already registered"
        })))
        .mount(&platform)
        .await;

    let resp = server
        .post("/api/v1/accounts")
        .json(&json!({ "name": "Rui", "email": "rui@example.com", "password": "secret1" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::CONFLICT);
    assert_eq!(resp.json::<Value>()["message"], "Este email já está registrado.");
}

#[tokio::test]
async fn should_reject_short_password_without_remote_call() {
    let (platform, server) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&platform)
        .await;

    let resp = server
        .post("/api/v1/accounts")
        .json(&json!({ "name": "Rui", "email": "rui@example.com", "password": "123" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
}

// ── GET /accounts ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_page_profiles() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("profiles")))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "4"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([profile("e", "Eva"), profile("f", "Fabio")])),
        )
        .expect(1)
        .mount(&platform)
        .await;

    let resp = server
        .get("/api/v1/accounts")
        .add_query_param("limit", 2)
        .add_query_param("offset", 4)
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[0]["created_at"], "2025-10-01T12:00:00.000Z");
}

#[tokio::test]
async fn should_serve_trailing_slash_path() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("profiles")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([profile("a", "Ana")])))
        .expect(1)
        .mount(&platform)
        .await;

    let resp = server.get("/api/v1/accounts/").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>()[0]["name"], "Ana");
}

#[tokio::test]
async fn should_reject_limit_above_1000() {
    let (_platform, server) = setup().await;
    let resp = server
        .get("/api/v1/accounts")
        .add_query_param("limit", 1001)
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_INPUT");
}

// ── GET / PUT / DELETE /accounts/{id} ────────────────────────────────────────

#[tokio::test]
async fn should_return_404_for_unknown_account() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("profiles")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&platform)
        .await;

    let resp = server.get("/api/v1/accounts/missing").await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["message"], "Conta não encontrada");
}

fn invalid_uuid() -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({
        "code": "22P02",
        "message": "invalid input syntax for type uuid: \"abc\"",
        "details": null,
        "hint": null
    }))
}

#[tokio::test]
async fn should_return_404_for_malformed_account_id() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("profiles")))
        .respond_with(invalid_uuid())
        .mount(&platform)
        .await;

    let resp = server.get("/api/v1/accounts/abc").await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "ACCOUNT_NOT_FOUND");
    assert_eq!(body["message"], "Conta não encontrada");
}

#[tokio::test]
async fn should_return_404_when_updating_or_deleting_malformed_id() {
    let (platform, server) = setup().await;
    Mock::given(method("PATCH"))
        .and(path(rest_path("profiles")))
        .respond_with(invalid_uuid())
        .mount(&platform)
        .await;
    Mock::given(method("DELETE"))
        .and(path(rest_path("profiles")))
        .respond_with(invalid_uuid())
        .mount(&platform)
        .await;

    let updated = server
        .put("/api/v1/accounts/abc")
        .json(&json!({ "name": "Rui Pedro" }))
        .await;
    assert_eq!(updated.status_code(), StatusCode::NOT_FOUND);

    let deleted = server.delete("/api/v1/accounts/abc").await;
    assert_eq!(deleted.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_update_account_name() {
    let (platform, server) = setup().await;
    Mock::given(method("PATCH"))
        .and(path(rest_path("profiles")))
        .and(query_param("id", "eq.acc-1"))
        .and(body_partial_json(json!({ "name": "Rui Pedro" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([profile("acc-1", "Rui Pedro")])))
        .expect(1)
        .mount(&platform)
        .await;

    let resp = server
        .put("/api/v1/accounts/acc-1")
        .json(&json!({ "name": "Rui Pedro" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>()["name"], "Rui Pedro");
}

#[tokio::test]
async fn should_delete_account() {
    let (platform, server) = setup().await;
    Mock::given(method("DELETE"))
        .and(path(rest_path("profiles")))
        .and(query_param("id", "eq.acc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([profile("acc-1", "Rui")])))
        .mount(&platform)
        .await;

    let resp = server.delete("/api/v1/accounts/acc-1").await;

    assert_eq!(resp.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn should_return_404_when_delete_removes_nothing() {
    let (platform, server) = setup().await;
    Mock::given(method("DELETE"))
        .and(path(rest_path("profiles")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&platform)
        .await;

    let resp = server.delete("/api/v1/accounts/acc-9").await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
}
