use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{CalorieSummary, FavoriteRelation, Receita, RecipeFilter};
use crate::error::BackendError;
use crate::state::AppState;
use crate::usecase::receita::{
    GetRecipeUseCase, ListMyRecipesUseCase, ListOtherRecipesUseCase, ListRecipesUseCase,
    OtherRecipesQuery, ToggleFavoriteUseCase,
};

// ── Query params / request / response types ──────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UserQuery {
    pub user_email: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct FilteredQuery {
    pub user_email: Option<String>,
    pub dificuldade: Option<String>,
    pub categoria: Option<String>,
    pub tipo_cozinhado: Option<String>,
    pub tempo_min: Option<i64>,
    pub tempo_max: Option<i64>,
    pub porcoes_min: Option<i64>,
    pub porcoes_max: Option<i64>,
    #[serde(default)]
    pub only_my_ingredients: bool,
}

impl FilteredQuery {
    fn filter(&self) -> RecipeFilter {
        let text = |v: &Option<String>| v.as_ref().filter(|s| !s.trim().is_empty()).cloned();
        RecipeFilter {
            dificuldade: text(&self.dificuldade),
            categoria: text(&self.categoria),
            tipo_cozinhado: text(&self.tipo_cozinhado),
            tempo_min: self.tempo_min,
            tempo_max: self.tempo_max,
            porcoes_min: self.porcoes_min,
            porcoes_max: self.porcoes_max,
        }
    }
}

fn parse_query<T: serde::de::DeserializeOwned + Default>(
    raw_query: Option<String>,
) -> Result<T, BackendError> {
    raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| BackendError::InvalidQuery)
        .map(Option::unwrap_or_default)
}

#[derive(Deserialize)]
pub struct FavoriteRequest {
    pub user_email: String,
}

/// Recipe columns plus `ingredients`, `totalCalories` and `ingredientCount`.
#[derive(Serialize)]
pub struct RecipeDetailResponse {
    #[serde(flatten)]
    pub receita: Receita,
    #[serde(flatten)]
    pub calories: CalorieSummary,
}

// ── GET /receitas ────────────────────────────────────────────────────────────

pub async fn list_receitas(
    State(state): State<AppState>,
) -> Result<Json<Vec<Receita>>, BackendError> {
    let uc = ListRecipesUseCase {
        recipes: state.recipe_repo(),
    };
    Ok(Json(uc.execute().await?))
}

// ── GET /receitas/minhas ─────────────────────────────────────────────────────

pub async fn list_minhas(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<Receita>>, BackendError> {
    let query: UserQuery = parse_query(raw_query)?;
    let uc = ListMyRecipesUseCase {
        recipes: state.recipe_repo(),
        favorites: state.favorite_repo(),
    };
    Ok(Json(uc.execute(query.user_email.as_deref()).await?))
}

// ── GET /receitas/outras ─────────────────────────────────────────────────────

pub async fn list_outras(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<Receita>>, BackendError> {
    let query: UserQuery = parse_query(raw_query)?;
    let uc = ListOtherRecipesUseCase {
        recipes: state.recipe_repo(),
        favorites: state.favorite_repo(),
        inventory: state.inventory_repo(),
    };
    let recipes = uc
        .execute(OtherRecipesQuery {
            user: query.user_email.as_deref(),
            filter: RecipeFilter::default(),
            only_my_ingredients: false,
        })
        .await?;
    Ok(Json(recipes))
}

// ── GET /receitas/outras/filtradas ───────────────────────────────────────────

pub async fn list_outras_filtradas(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<Receita>>, BackendError> {
    let query: FilteredQuery = parse_query(raw_query)?;
    let uc = ListOtherRecipesUseCase {
        recipes: state.recipe_repo(),
        favorites: state.favorite_repo(),
        inventory: state.inventory_repo(),
    };
    let recipes = uc
        .execute(OtherRecipesQuery {
            user: query.user_email.as_deref(),
            filter: query.filter(),
            only_my_ingredients: query.only_my_ingredients,
        })
        .await?;
    Ok(Json(recipes))
}

// ── GET /receitas/{id} ───────────────────────────────────────────────────────

pub async fn get_receita(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RecipeDetailResponse>, BackendError> {
    let uc = GetRecipeUseCase {
        recipes: state.recipe_repo(),
        ingredients: state.ingredient_repo(),
    };
    let detail = uc.execute(id).await?;
    Ok(Json(RecipeDetailResponse {
        receita: detail.receita,
        calories: detail.calories,
    }))
}

// ── POST /receitas/{id}/favorito ─────────────────────────────────────────────

pub async fn toggle_favorito(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<FavoriteRequest>,
) -> Result<Json<FavoriteRelation>, BackendError> {
    let uc = ToggleFavoriteUseCase {
        recipes: state.recipe_repo(),
        favorites: state.favorite_repo(),
    };
    Ok(Json(uc.execute(id, &body.user_email).await?))
}
