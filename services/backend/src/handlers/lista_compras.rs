use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{Ingrediente, UpsertOutcome};
use crate::error::BackendError;
use crate::state::AppState;
use crate::usecase::stock::{
    AddStockUseCase, ClearStockUseCase, ListStockUseCase, RemoveStockUseCase,
};

// ── Query params / response types ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddItemQuery {
    #[serde(rename = "idIngrediente")]
    pub id_ingrediente: i64,
    #[serde(rename = "idUtilizador")]
    pub id_utilizador: String,
    #[serde(default = "default_quantity")]
    pub quantidade: i64,
}

fn default_quantity() -> i64 {
    1
}

#[derive(Serialize)]
pub struct ShoppingItemResponse {
    #[serde(rename = "idIngrediente")]
    pub id_ingrediente: i64,
    #[serde(rename = "idUtilizador")]
    pub id_utilizador: String,
    pub quantidade: i64,
    pub ingrediente: Ingrediente,
}

#[derive(Serialize)]
pub struct ShoppingLineResponse {
    pub message: &'static str,
    #[serde(rename = "idIngrediente")]
    pub id_ingrediente: i64,
    #[serde(rename = "idUtilizador")]
    pub id_utilizador: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantidade: Option<i64>,
}

#[derive(Serialize)]
pub struct ShoppingListClearedResponse {
    pub message: &'static str,
    #[serde(rename = "idUtilizador")]
    pub id_utilizador: String,
}

// ── GET /lista-compras/usuario/{email} ───────────────────────────────────────

pub async fn get_lista_compras(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<ShoppingItemResponse>>, BackendError> {
    let uc = ListStockUseCase {
        repo: state.shopping_list_repo(),
    };
    let items = uc
        .execute(&email)
        .await?
        .into_iter()
        .filter_map(|entry| {
            Some(ShoppingItemResponse {
                ingrediente: entry.ingrediente?,
                id_ingrediente: entry.line.id_ingrediente,
                id_utilizador: entry.line.id_utilizador,
                quantidade: entry.line.quantidade,
            })
        })
        .collect();
    Ok(Json(items))
}

// ── POST /lista-compras?idIngrediente=&idUtilizador=&quantidade= ─────────────

pub async fn add_to_lista_compras(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<(StatusCode, Json<ShoppingLineResponse>), BackendError> {
    let query: AddItemQuery = serde_qs::from_str(raw_query.as_deref().unwrap_or_default())
        .map_err(|_| BackendError::InvalidQuery)?;

    let uc = AddStockUseCase {
        repo: state.shopping_list_repo(),
    };
    let outcome = uc
        .execute(&query.id_utilizador, query.id_ingrediente, query.quantidade)
        .await?;
    let message = match outcome {
        UpsertOutcome::Inserted(_) => "Item added to shopping list",
        UpsertOutcome::Incremented(_) => "Item quantity updated",
    };
    let line = outcome.line();
    Ok((
        StatusCode::CREATED,
        Json(ShoppingLineResponse {
            message,
            id_ingrediente: line.id_ingrediente,
            id_utilizador: line.id_utilizador.clone(),
            quantidade: Some(line.quantidade),
        }),
    ))
}

// ── DELETE /lista-compras/item/{id}/{email} ──────────────────────────────────

pub async fn remove_from_lista_compras(
    State(state): State<AppState>,
    Path((id_ingrediente, email)): Path<(i64, String)>,
) -> Result<Json<ShoppingLineResponse>, BackendError> {
    let uc = RemoveStockUseCase {
        repo: state.shopping_list_repo(),
    };
    uc.execute(&email, id_ingrediente).await?;
    Ok(Json(ShoppingLineResponse {
        message: "Item removed from shopping list",
        id_ingrediente,
        id_utilizador: email,
        quantidade: None,
    }))
}

// ── DELETE /lista-compras/usuario/{email} ────────────────────────────────────

pub async fn clear_lista_compras(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<ShoppingListClearedResponse>, BackendError> {
    let uc = ClearStockUseCase {
        repo: state.shopping_list_repo(),
    };
    uc.execute(&email).await?;
    Ok(Json(ShoppingListClearedResponse {
        message: "Shopping list cleared",
        id_utilizador: email,
    }))
}
