use axum::http::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use nomnom_testing::platform::rest_path;

use crate::helpers::setup;

fn row() -> Value {
    json!({
        "email": "rui@example.com",
        "nome": "Rui",
        "altura": 180.0,
        "data_nascimento": "1990-04-12",
        "peso": 80.0,
        "alimentacao": "vegano",
        "sexo": "masculino"
    })
}

#[tokio::test]
async fn should_report_existing_profile_on_check() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("Utilizador")))
        .and(query_param("email", "eq.rui@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([row()])))
        .mount(&platform)
        .await;

    let resp = server.get("/api/v1/utilizador/check/rui@example.com").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["exists"], true);
    assert_eq!(body["profile"]["nome"], "Rui");
}

#[tokio::test]
async fn should_report_missing_profile_on_check() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("Utilizador")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&platform)
        .await;

    let resp = server.get("/api/v1/utilizador/check/ana@example.com").await;

    assert_eq!(resp.json::<Value>(), json!({ "exists": false, "profile": null }));
}

#[tokio::test]
async fn should_create_complete_profile() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("Utilizador")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&platform)
        .await;
    Mock::given(method("POST"))
        .and(path(rest_path("Utilizador")))
        .and(body_partial_json(json!({
            "email": "rui@example.com",
            "data_nascimento": "1990-04-12",
            "sexo": "masculino"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([row()])))
        .expect(1)
        .mount(&platform)
        .await;

    let mut body = row();
    body["altura"] = json!(180);
    let resp = server.post("/api/v1/utilizador").json(&body).await;

    assert_eq!(resp.status_code(), StatusCode::CREATED);
    assert_eq!(resp.json::<Value>()["alimentacao"], "vegano");
}

#[tokio::test]
async fn should_return_409_for_existing_profile() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("Utilizador")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([row()])))
        .mount(&platform)
        .await;

    let resp = server.post("/api/v1/utilizador").json(&row()).await;

    assert_eq!(resp.status_code(), StatusCode::CONFLICT);
    assert_eq!(resp.json::<Value>()["kind"], "UTILIZADOR_EXISTS");
}

#[tokio::test]
async fn should_reject_incomplete_profile() {
    let (_platform, server) = setup().await;
    let mut body = row();
    body["sexo"] = Value::Null;

    let resp = server.post("/api/v1/utilizador").json(&body).await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["message"], "Campo obrigatório: sexo");
}

#[tokio::test]
async fn should_accept_trailing_slash_on_create() {
    let (_platform, server) = setup().await;
    let mut body = row();
    body["sexo"] = Value::Null;

    let resp = server.post("/api/v1/utilizador/").json(&body).await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["message"], "Campo obrigatório: sexo");
}

#[tokio::test]
async fn should_return_404_when_updating_missing_profile() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("Utilizador")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&platform)
        .await;

    let resp = server
        .put("/api/v1/utilizador/ghost@example.com")
        .json(&json!({ "peso": 70.0 }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_400_when_update_has_no_fields() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("Utilizador")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([row()])))
        .mount(&platform)
        .await;

    let resp = server
        .put("/api/v1/utilizador/rui@example.com")
        .json(&json!({}))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.json::<Value>()["message"],
        "Nenhum dado fornecido para atualização"
    );
}

#[tokio::test]
async fn should_list_enum_options() {
    let (_platform, server) = setup().await;
    let resp = server.get("/api/v1/utilizador/options/enums").await;

    let body: Value = resp.json();
    assert_eq!(body["alimentacao"][0]["value"], "sem restrições");
    assert_eq!(body["sexo"][2]["label"], "Outro");
}
