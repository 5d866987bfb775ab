use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use nomnom_domain::nutrition::{Alimentacao, EnumOption, Sexo};
use nomnom_domain::profile::RawProfile;

use crate::domain::types::Utilizador;
use crate::error::AccountsError;
use crate::state::AppState;
use crate::usecase::utilizador::{
    CheckUtilizadorUseCase, CreateUtilizadorUseCase, GetUtilizadorUseCase,
    UpdateUtilizadorUseCase,
};

#[derive(Deserialize, Default)]
pub struct ProfileRequest {
    #[serde(default)]
    pub email: String,
    pub nome: Option<String>,
    pub data_nascimento: Option<String>,
    pub altura: Option<f64>,
    pub peso: Option<f64>,
    pub sexo: Option<String>,
    pub alimentacao: Option<String>,
}

impl ProfileRequest {
    fn into_parts(self) -> (String, RawProfile) {
        let raw = RawProfile {
            nome: self.nome,
            data_nascimento: self.data_nascimento,
            altura: self.altura,
            peso: self.peso,
            sexo: self.sexo,
            alimentacao: self.alimentacao,
        };
        (self.email, raw)
    }
}

#[derive(Serialize)]
pub struct EnumOptionsResponse {
    pub alimentacao: Vec<EnumOption>,
    pub sexo: Vec<EnumOption>,
}

#[derive(Serialize)]
pub struct CheckResponse {
    pub exists: bool,
    pub profile: Option<Utilizador>,
}

// ── GET /utilizador/options/enums ────────────────────────────────────────────

pub async fn get_enum_options() -> Json<EnumOptionsResponse> {
    Json(EnumOptionsResponse {
        alimentacao: Alimentacao::options(),
        sexo: Sexo::options(),
    })
}

// ── GET /utilizador/check/{email} ────────────────────────────────────────────

pub async fn check_utilizador(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<CheckResponse>, AccountsError> {
    let uc = CheckUtilizadorUseCase {
        repo: state.utilizador_repo(),
    };
    let profile = uc.execute(&email).await?;
    Ok(Json(CheckResponse {
        exists: profile.is_some(),
        profile,
    }))
}

// ── POST /utilizador ─────────────────────────────────────────────────────────

pub async fn create_utilizador(
    State(state): State<AppState>,
    Json(body): Json<ProfileRequest>,
) -> Result<(StatusCode, Json<Utilizador>), AccountsError> {
    let (email, raw) = body.into_parts();
    let uc = CreateUtilizadorUseCase {
        repo: state.utilizador_repo(),
    };
    let row = uc.execute(&email, raw).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

// ── GET /utilizador/{email} ──────────────────────────────────────────────────

pub async fn get_utilizador(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Utilizador>, AccountsError> {
    let uc = GetUtilizadorUseCase {
        repo: state.utilizador_repo(),
    };
    Ok(Json(uc.execute(&email).await?))
}

// ── PUT /utilizador/{email} ──────────────────────────────────────────────────

pub async fn update_utilizador(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(body): Json<ProfileRequest>,
) -> Result<Json<Utilizador>, AccountsError> {
    let (_, raw) = body.into_parts();
    let uc = UpdateUtilizadorUseCase {
        repo: state.utilizador_repo(),
    };
    Ok(Json(uc.execute(&email, raw).await?))
}
