use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use nomnom_domain::error::DomainError;

use crate::domain::types::{Ingrediente, NewIngrediente, StockLine, UpsertOutcome};
use crate::error::BackendError;
use crate::state::AppState;
use crate::usecase::ingrediente::{CreateIngredientUseCase, ListIngredientsUseCase};
use crate::usecase::stock::{
    AddStockUseCase, ListStockUseCase, RemoveStockUseCase, SetStockQuantityUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct InventoryRequest {
    #[serde(rename = "idUtilizador")]
    pub id_utilizador: String,
    #[serde(rename = "idIngrediente")]
    pub id_ingrediente: i64,
    #[serde(default = "default_quantity")]
    pub quantidade: f64,
}

fn default_quantity() -> f64 {
    1.0
}

/// Body of the set-quantity endpoint; `quantidade` is required.
#[derive(Deserialize)]
pub struct InventoryQuantityRequest {
    #[serde(rename = "idUtilizador")]
    pub id_utilizador: String,
    #[serde(rename = "idIngrediente")]
    pub id_ingrediente: i64,
    pub quantidade: f64,
}

/// Clients send plain JSON numbers; stock is counted in whole units.
fn whole_quantity(quantidade: f64) -> Result<i64, BackendError> {
    if !quantidade.is_finite() || quantidade.fract() != 0.0 || quantidade.abs() > i64::MAX as f64 {
        return Err(DomainError::InvalidQuantity.into());
    }
    Ok(quantidade as i64)
}

#[derive(Deserialize)]
pub struct InventoryKey {
    #[serde(rename = "idUtilizador")]
    pub id_utilizador: String,
    #[serde(rename = "idIngrediente")]
    pub id_ingrediente: i64,
}

/// Inventory line flattened with its ingredient.
#[derive(Serialize)]
pub struct InventoryItemResponse {
    #[serde(rename = "idIngrediente")]
    pub id_ingrediente: i64,
    pub quantidade: i64,
    pub id: i64,
    pub nome: String,
    pub grupo_alimentar: Option<String>,
    pub unidade_medida: Option<String>,
    pub calorias: Option<f64>,
}

#[derive(Serialize)]
pub struct InventoryLineResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub line: StockLine,
}

#[derive(Serialize)]
pub struct InventoryRemovedResponse {
    pub message: &'static str,
    #[serde(rename = "idUtilizador")]
    pub id_utilizador: String,
    #[serde(rename = "idIngrediente")]
    pub id_ingrediente: i64,
}

// ── GET /ingredientes ────────────────────────────────────────────────────────

pub async fn list_ingredientes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Ingrediente>>, BackendError> {
    let uc = ListIngredientsUseCase {
        repo: state.ingredient_repo(),
    };
    Ok(Json(uc.execute().await?))
}

// ── POST /ingredientes ───────────────────────────────────────────────────────

pub async fn create_ingrediente(
    State(state): State<AppState>,
    Json(body): Json<NewIngrediente>,
) -> Result<(StatusCode, Json<Ingrediente>), BackendError> {
    let uc = CreateIngredientUseCase {
        repo: state.ingredient_repo(),
    };
    let created = uc.execute(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// ── GET /ingredientes/inventario/{email} ─────────────────────────────────────

pub async fn get_inventory(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<InventoryItemResponse>>, BackendError> {
    let uc = ListStockUseCase {
        repo: state.inventory_repo(),
    };
    let items = uc
        .execute(&email)
        .await?
        .into_iter()
        .filter_map(|entry| {
            let ingrediente = entry.ingrediente?;
            Some(InventoryItemResponse {
                id_ingrediente: entry.line.id_ingrediente,
                quantidade: entry.line.quantidade,
                id: ingrediente.id,
                nome: ingrediente.nome,
                grupo_alimentar: ingrediente.grupo_alimentar,
                unidade_medida: ingrediente.unidade_medida,
                calorias: ingrediente.calorias,
            })
        })
        .collect();
    Ok(Json(items))
}

// ── POST /ingredientes/inventario ────────────────────────────────────────────

pub async fn add_to_inventory(
    State(state): State<AppState>,
    body: Result<Json<InventoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<InventoryLineResponse>), BackendError> {
    let Json(body) = body?;
    let quantidade = whole_quantity(body.quantidade)?;
    let uc = AddStockUseCase {
        repo: state.inventory_repo(),
    };
    let outcome = uc
        .execute(&body.id_utilizador, body.id_ingrediente, quantidade)
        .await?;
    let (status, message) = match outcome {
        UpsertOutcome::Inserted(_) => (StatusCode::CREATED, "Ingrediente adicionado ao inventário"),
        UpsertOutcome::Incremented(_) => (StatusCode::OK, "Quantidade atualizada"),
    };
    let line = outcome.line().clone();
    Ok((status, Json(InventoryLineResponse { message, line })))
}

// ── PATCH /ingredientes/inventario ───────────────────────────────────────────

pub async fn update_inventory_quantity(
    State(state): State<AppState>,
    body: Result<Json<InventoryQuantityRequest>, JsonRejection>,
) -> Result<Json<InventoryLineResponse>, BackendError> {
    let Json(body) = body?;
    let quantidade = whole_quantity(body.quantidade)?;
    let uc = SetStockQuantityUseCase {
        repo: state.inventory_repo(),
    };
    let line = uc
        .execute(&body.id_utilizador, body.id_ingrediente, quantidade)
        .await?;
    Ok(Json(InventoryLineResponse {
        message: "Quantidade atualizada",
        line,
    }))
}

// ── DELETE /ingredientes/inventario ──────────────────────────────────────────

pub async fn remove_from_inventory(
    State(state): State<AppState>,
    body: Result<Json<InventoryKey>, JsonRejection>,
) -> Result<Json<InventoryRemovedResponse>, BackendError> {
    let Json(body) = body?;
    let uc = RemoveStockUseCase {
        repo: state.inventory_repo(),
    };
    uc.execute(&body.id_utilizador, body.id_ingrediente).await?;
    Ok(Json(InventoryRemovedResponse {
        message: "Ingrediente removido do inventário",
        id_utilizador: body.id_utilizador,
        id_ingrediente: body.id_ingrediente,
    }))
}
