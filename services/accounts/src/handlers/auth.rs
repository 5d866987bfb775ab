use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use nomnom_auth_types::bearer::BearerToken;

use crate::domain::types::Identity;
use crate::error::AccountsError;
use crate::state::AppState;
use crate::usecase::auth::{CurrentUserUseCase, LoginUseCase, LogoutUseCase};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(serialize_with = "nomnom_core::serde::to_rfc3339_ms_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Identity> for UserResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email.unwrap_or_default(),
            name: identity.name.unwrap_or_default(),
            created_at: identity.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub token_type: &'static str,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AccountsError> {
    let uc = LoginUseCase { auth: state.auth() };
    let session = uc.execute(body.email.trim(), &body.password).await?;
    Ok(Json(LoginResponse {
        user: session.user.into(),
        access_token: session.access_token,
        refresh_token: session.refresh_token,
        expires_in: session.expires_in,
        token_type: "bearer",
        message: "Login realizado com sucesso",
    }))
}

// ── POST /auth/logout ────────────────────────────────────────────────────────

pub async fn logout(
    State(state): State<AppState>,
    token: Option<BearerToken>,
) -> Result<Json<MessageResponse>, AccountsError> {
    let uc = LogoutUseCase { auth: state.auth() };
    uc.execute(token.as_ref().map(BearerToken::as_str)).await?;
    Ok(Json(MessageResponse {
        message: "Logout realizado com sucesso",
    }))
}

// ── GET /auth/me ─────────────────────────────────────────────────────────────

pub async fn me(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<UserResponse>, AccountsError> {
    let uc = CurrentUserUseCase { auth: state.auth() };
    Ok(Json(uc.execute(token.as_str()).await?.into()))
}
