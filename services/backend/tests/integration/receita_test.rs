use axum::http::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nomnom_testing::platform::rest_path;

use crate::helpers::setup;

async fn mount_recipes(platform: &MockServer) {
    Mock::given(method("GET"))
        .and(path(rest_path("Receita")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "nome": "Sopa", "dificuldade": "fácil" },
            { "id": 2, "nome": "Bolo", "dificuldade": "média" },
            { "id": 3, "nome": "Salada", "dificuldade": "fácil" }
        ])))
        .mount(platform)
        .await;
}

// ── GET /receitas/{id} ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_recipe_with_calorie_summary() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("Receita")))
        .and(query_param("id", "eq.10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "id": 10, "nome": "Tarte" }])),
        )
        .mount(&platform)
        .await;
    Mock::given(method("GET"))
        .and(path(rest_path("ReceitaIngrediente")))
        .and(query_param("idReceita", "in.(10)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "idReceita": 10, "idIngrediente": 1, "quantidade": 200.0 },
            { "idReceita": 10, "idIngrediente": 2, "quantidade": 50.0 }
        ])))
        .mount(&platform)
        .await;
    Mock::given(method("GET"))
        .and(path(rest_path("Ingrediente")))
        .and(query_param("id", "eq.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "nome": "Maçã",
            "grupo_alimentar": "fruta",
            "unidade_medida": "g",
            "calorias": 52.0
        }])))
        .mount(&platform)
        .await;
    Mock::given(method("GET"))
        .and(path(rest_path("Ingrediente")))
        .and(query_param("id", "eq.2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&platform)
        .await;

    let resp = server.get("/api/v1/receitas/10").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["id"], 10);
    assert_eq!(body["nome"], "Tarte");
    assert_eq!(body["totalCalories"], 104.0);
    assert_eq!(body["ingredientCount"], 1);
    assert_eq!(body["ingredients"][0]["name"], "Maçã");
    assert_eq!(body["ingredients"][0]["caloriesPerUnit"], 52.0);
}

#[tokio::test]
async fn should_return_404_for_unknown_recipe() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("Receita")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&platform)
        .await;

    let resp = server.get("/api/v1/receitas/99").await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["message"], "Receita não encontrada");
}

// ── favorites partition ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_split_favorites_from_others() {
    let (platform, server) = setup().await;
    mount_recipes(&platform).await;
    Mock::given(method("GET"))
        .and(path(rest_path("ReceitaUtilizador")))
        .and(query_param("idUtilizador", "eq.ana@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "idUtilizador": "ana@example.com", "idReceita": 2, "favorita": true },
            { "idUtilizador": "ana@example.com", "idReceita": 3, "favorita": false }
        ])))
        .mount(&platform)
        .await;

    let mine = server
        .get("/api/v1/receitas/minhas")
        .add_query_param("user_email", "ana@example.com")
        .await;
    let others = server
        .get("/api/v1/receitas/outras")
        .add_query_param("user_email", "ana@example.com")
        .await;

    assert_eq!(mine.status_code(), StatusCode::OK);
    let mine: Value = mine.json();
    assert_eq!(mine.as_array().map(Vec::len), Some(1));
    assert_eq!(mine[0]["id"], 2);

    let ids: Vec<i64> = others
        .json::<Value>()
        .as_array()
        .map(|a| a.iter().filter_map(|r| r["id"].as_i64()).collect())
        .unwrap_or_default();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn should_return_no_favorites_without_user() {
    let (platform, server) = setup().await;
    mount_recipes(&platform).await;

    let resp = server.get("/api/v1/receitas/minhas").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>(), json!([]));
}

#[tokio::test]
async fn should_forward_filters_to_recipe_query() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("Receita")))
        .and(query_param("dificuldade", "eq.fácil"))
        .and(query_param("tempo", "lte.30"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "id": 3, "nome": "Salada" }])),
        )
        .expect(1)
        .mount(&platform)
        .await;

    let resp = server
        .get("/api/v1/receitas/outras/filtradas")
        .add_query_param("dificuldade", "fácil")
        .add_query_param("tempo_max", 30)
        .add_query_param("categoria", "")
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>()[0]["id"], 3);
}

// ── POST /receitas/{id}/favorito ─────────────────────────────────────────────

#[tokio::test]
async fn should_create_favorite_on_first_toggle() {
    let (platform, server) = setup().await;
    Mock::given(method("GET"))
        .and(path(rest_path("Receita")))
        .and(query_param("id", "eq.2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 2 }])))
        .mount(&platform)
        .await;
    Mock::given(method("GET"))
        .and(path(rest_path("ReceitaUtilizador")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&platform)
        .await;
    Mock::given(method("POST"))
        .and(path(rest_path("ReceitaUtilizador")))
        .and(body_partial_json(json!({ "idReceita": 2, "favorita": true })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            { "idUtilizador": "ana@example.com", "idReceita": 2, "favorita": true }
        ])))
        .expect(1)
        .mount(&platform)
        .await;

    let resp = server
        .post("/api/v1/receitas/2/favorito")
        .json(&json!({ "user_email": "ana@example.com" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>()["favorita"], true);
}
