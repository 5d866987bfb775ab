use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use nomnom_domain::error::DomainError;

// ── Auth ─────────────────────────────────────────────────────────────────────

/// Identity held by the auth provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: String,
    pub email: Option<String>,
    /// `user_metadata.name`
    pub name: Option<String>,
    /// `user_metadata.avatar_url`
    pub avatar_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub token_type: String,
    pub user: Identity,
}

/// `session` is absent while email confirmation is pending.
#[derive(Debug, Clone, PartialEq)]
pub struct SignUpResult {
    pub user: Option<Identity>,
    pub session: Option<AuthSession>,
}

/// Partial write of `user_metadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetadataPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

// ── Utilizador ───────────────────────────────────────────────────────────────

/// Row of `Utilizador`, keyed by email. Every profile field is optional until
/// the profile is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utilizador {
    pub email: String,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub altura: Option<f64>,
    #[serde(default)]
    pub data_nascimento: Option<String>,
    #[serde(default)]
    pub peso: Option<f64>,
    #[serde(default)]
    pub sexo: Option<String>,
    #[serde(default)]
    pub alimentacao: Option<String>,
}

// ── Ingrediente ──────────────────────────────────────────────────────────────

/// Row of `Ingrediente`. `calorias` is per 100 units of `unidade_medida`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingrediente {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub grupo_alimentar: Option<String>,
    #[serde(default)]
    pub unidade_medida: Option<String>,
    #[serde(default)]
    pub calorias: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIngrediente {
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grupo_alimentar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unidade_medida: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calorias: Option<f64>,
}

impl NewIngrediente {
    pub fn validate(mut self) -> Result<Self, DomainError> {
        let nome = self.nome.trim();
        if nome.is_empty() {
            return Err(DomainError::MissingNome);
        }
        if self.calorias.is_some_and(|c| c < 0.0 || !c.is_finite()) {
            return Err(DomainError::InvalidQuantity);
        }
        self.nome = nome.to_owned();
        Ok(self)
    }
}

// ── Inventario / ListaCompras ────────────────────────────────────────────────

/// The two per-user ingredient tables sharing the `(idUtilizador, idIngrediente)`
/// key and upsert-by-increment semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockTable {
    Inventario,
    ListaCompras,
}

impl StockTable {
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Inventario => "Inventario",
            Self::ListaCompras => "ListaCompras",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLine {
    #[serde(rename = "idUtilizador")]
    pub id_utilizador: String,
    #[serde(rename = "idIngrediente")]
    pub id_ingrediente: i64,
    pub quantidade: i64,
}

/// Stock line with its ingredient embedded. Lines whose ingredient no longer
/// resolves come back with `ingrediente: None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StockEntry {
    #[serde(flatten)]
    pub line: StockLine,
    #[serde(rename = "Ingrediente", default)]
    pub ingrediente: Option<Ingrediente>,
}

/// Result of an add: a fresh row, or an existing row whose quantity grew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted(StockLine),
    Incremented(StockLine),
}

impl UpsertOutcome {
    pub fn line(&self) -> &StockLine {
        match self {
            Self::Inserted(line) | Self::Incremented(line) => line,
        }
    }
}

// ── Receita ──────────────────────────────────────────────────────────────────

/// Row of `Receita`. Columns other than `id` are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receita {
    pub id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Row of `ReceitaIngrediente`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeIngredient {
    #[serde(rename = "idReceita")]
    pub id_receita: i64,
    #[serde(rename = "idIngrediente")]
    pub id_ingrediente: i64,
    #[serde(default)]
    pub quantidade: f64,
}

/// Row of `ReceitaUtilizador`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRelation {
    #[serde(rename = "idUtilizador")]
    pub id_utilizador: String,
    #[serde(rename = "idReceita")]
    pub id_receita: i64,
    #[serde(default)]
    pub favorita: bool,
}

/// Column filters pushed down to the table store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecipeFilter {
    pub dificuldade: Option<String>,
    pub categoria: Option<String>,
    pub tipo_cozinhado: Option<String>,
    pub tempo_min: Option<i64>,
    pub tempo_max: Option<i64>,
    pub porcoes_min: Option<i64>,
    pub porcoes_max: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieLine {
    pub id: i64,
    pub name: String,
    pub quantity: f64,
    pub calories_per_unit: f64,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieSummary {
    pub ingredients: Vec<CalorieLine>,
    pub total_calories: f64,
    pub ingredient_count: usize,
}

/// Three disjoint recipe id sets whose union is every recipe id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritePartition {
    pub favorite: BTreeSet<i64>,
    pub not_favorite: BTreeSet<i64>,
    pub unrelated: BTreeSet<i64>,
}

impl FavoritePartition {
    pub fn is_other(&self, id: i64) -> bool {
        self.not_favorite.contains(&id) || self.unrelated.contains(&id)
    }
}
