use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use nomnom_domain::nutrition::{Alimentacao, EnumOption, Sexo};
use nomnom_domain::profile::RawProfile;

use crate::domain::types::Utilizador;
use crate::error::BackendError;
use crate::state::AppState;
use crate::usecase::utilizador::{GetUtilizadorUseCase, UpsertUtilizadorUseCase};

// ── Request / response types ─────────────────────────────────────────────────

/// Profile fields; `tipo_alimentacao` is accepted for `alimentacao`.
#[derive(Deserialize, Default)]
pub struct ProfileRequest {
    pub email: Option<String>,
    pub nome: Option<String>,
    pub data_nascimento: Option<String>,
    pub altura: Option<f64>,
    pub peso: Option<f64>,
    pub sexo: Option<String>,
    #[serde(alias = "tipo_alimentacao")]
    pub alimentacao: Option<String>,
}

impl ProfileRequest {
    fn into_raw(self) -> RawProfile {
        RawProfile {
            nome: self.nome,
            data_nascimento: self.data_nascimento,
            altura: self.altura,
            peso: self.peso,
            sexo: self.sexo,
            alimentacao: self.alimentacao,
        }
    }
}

#[derive(Serialize)]
pub struct EnumOptionsResponse {
    pub sexo: Vec<EnumOption>,
    pub alimentacao: Vec<EnumOption>,
}

#[derive(Serialize)]
pub struct ProfileUpdatedResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data: Utilizador,
}

impl From<Utilizador> for ProfileUpdatedResponse {
    fn from(data: Utilizador) -> Self {
        Self {
            status: "success",
            message: "Perfil atualizado com sucesso",
            data,
        }
    }
}

// ── GET /utilizador/options/enums ────────────────────────────────────────────

pub async fn get_enum_options() -> Json<EnumOptionsResponse> {
    Json(EnumOptionsResponse {
        sexo: Sexo::options(),
        alimentacao: Alimentacao::options(),
    })
}

// ── GET /utilizador/{email} ──────────────────────────────────────────────────

pub async fn get_utilizador(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Utilizador>, BackendError> {
    let uc = GetUtilizadorUseCase {
        repo: state.utilizador_repo(),
    };
    Ok(Json(uc.execute(&email).await?))
}

// ── PUT /utilizador/{email}, POST /utilizador/{email}/profile ────────────────

pub async fn upsert_utilizador(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(body): Json<ProfileRequest>,
) -> Result<Json<ProfileUpdatedResponse>, BackendError> {
    let uc = UpsertUtilizadorUseCase {
        repo: state.utilizador_repo(),
    };
    let row = uc.execute(&email, body.into_raw()).await?;
    Ok(Json(row.into()))
}

// ── POST /utilizador ─────────────────────────────────────────────────────────

pub async fn upsert_utilizador_from_body(
    State(state): State<AppState>,
    Json(mut body): Json<ProfileRequest>,
) -> Result<Json<ProfileUpdatedResponse>, BackendError> {
    let email = body.email.take().ok_or(BackendError::MissingEmail)?;
    let uc = UpsertUtilizadorUseCase {
        repo: state.utilizador_repo(),
    };
    let row = uc.execute(&email, body.into_raw()).await?;
    Ok(Json(row.into()))
}
