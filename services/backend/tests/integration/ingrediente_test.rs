use axum::http::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use nomnom_testing::platform::rest_path;

use crate::helpers::setup;

#[tokio::test]
async fn should_list_ingredientes() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("Ingrediente")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "nome": "Arroz", "unidade_medida": "g", "calorias": 130.0 },
            { "id": 2, "nome": "Feijão" }
        ])))
        .mount(&platform)
        .await;

    let resp = server.get("/api/v1/ingredientes").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert!(body[1]["calorias"].is_null());
}

#[tokio::test]
async fn should_reject_ingrediente_without_nome() {
    let (_platform, server) = setup().await;
    let resp = server
        .post("/api/v1/ingredientes")
        .json(&json!({ "nome": "  " }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_INPUT");
}

#[tokio::test]
async fn should_flatten_inventory_with_ingredient() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("Inventario")))
        .and(query_param("idUtilizador", "eq.ana@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "idUtilizador": "ana@example.com",
                "idIngrediente": 1,
                "quantidade": 3,
                "Ingrediente": { "id": 1, "nome": "Arroz", "unidade_medida": "g", "calorias": 130.0 }
            },
            {
                "idUtilizador": "ana@example.com",
                "idIngrediente": 7,
                "quantidade": 1,
                "Ingrediente": null
            }
        ])))
        .mount(&platform)
        .await;

    let resp = server.get("/api/v1/ingredientes/inventario/ana@example.com").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["nome"], "Arroz");
    assert_eq!(body[0]["quantidade"], 3);
}

#[tokio::test]
async fn should_increment_existing_inventory_line() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("Inventario")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "idUtilizador": "ana@example.com", "idIngrediente": 1, "quantidade": 2 }
        ])))
        .mount(&platform)
        .await;
    Mock::given(method("PATCH"))
        .and(path(rest_path("Inventario")))
        .and(body_partial_json(json!({ "quantidade": 5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "idUtilizador": "ana@example.com", "idIngrediente": 1, "quantidade": 5 }
        ])))
        .expect(1)
        .mount(&platform)
        .await;

    let resp = server
        .post("/api/v1/ingredientes/inventario")
        .json(&json!({ "idUtilizador": "ana@example.com", "idIngrediente": 1, "quantidade": 3 }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["message"], "Quantidade atualizada");
    assert_eq!(body["quantidade"], 5);
}

#[tokio::test]
async fn should_reject_non_positive_quantity() {
    let (_platform, server) = setup().await;
    let resp = server
        .post("/api/v1/ingredientes/inventario")
        .json(&json!({ "idUtilizador": "ana@example.com", "idIngrediente": 1, "quantidade": 0 }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_return_404_when_setting_missing_line() {
    let (platform, server) = setup().await;
    Mock::given(method("PATCH"))
        .and(path(rest_path("Inventario")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&platform)
        .await;

    let resp = server
        .patch("/api/v1/ingredientes/inventario")
        .json(&json!({ "idUtilizador": "ana@example.com", "idIngrediente": 4, "quantidade": 2 }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["kind"], "STOCK_ITEM_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_set_quantity_without_quantidade() {
    let (platform, server) = setup().await;
    Mock::given(method("PATCH"))
        .and(path(rest_path("Inventario")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&platform)
        .await;

    let resp = server
        .patch("/api/v1/ingredientes/inventario")
        .json(&json!({ "idUtilizador": "ana@example.com", "idIngrediente": 1 }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_BODY");
    let received = platform.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn should_reject_fractional_quantity_with_error_envelope() {
    let (platform, server) = setup().await;

    let resp = server
        .post("/api/v1/ingredientes/inventario")
        .json(&json!({ "idUtilizador": "ana@example.com", "idIngrediente": 1, "quantidade": 1.5 }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "INVALID_INPUT");
    assert_eq!(body["message"], "Quantidade inválida");
    let received = platform.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn should_accept_whole_number_written_as_float() {
    let (platform, server) = setup().await;
    Mock::given(method("PATCH"))
        .and(path(rest_path("Inventario")))
        .and(query_param("idIngrediente", "eq.1"))
        .and(body_partial_json(json!({ "quantidade": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "idUtilizador": "ana@example.com", "idIngrediente": 1, "quantidade": 2 }
        ])))
        .expect(1)
        .mount(&platform)
        .await;

    let resp = server
        .patch("/api/v1/ingredientes/inventario")
        .json(&json!({ "idUtilizador": "ana@example.com", "idIngrediente": 1, "quantidade": 2.0 }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>()["quantidade"], 2);
}
