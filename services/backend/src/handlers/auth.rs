use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use nomnom_auth_types::bearer::BearerToken;

use crate::error::BackendError;
use crate::state::AppState;
use crate::usecase::auth::{
    CurrentUserUseCase, LoginOutput, LoginUseCase, LogoutUseCase, RegisterUseCase, SignUpInput,
    SignUpUseCase, UpdateNameUseCase, UpdatePictureUseCase, UserView,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl From<RegisterRequest> for SignUpInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            name: req.name,
        }
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateNameRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct UpdatePictureRequest {
    #[serde(alias = "avatar_url")]
    pub url: String,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(serialize_with = "nomnom_core::serde::to_rfc3339_ms_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<UserView> for UserResponse {
    fn from(view: UserView) -> Self {
        Self {
            id: view.id,
            email: view.email,
            name: view.name,
            created_at: view.created_at,
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
    pub profile_complete: bool,
}

impl LoginResponse {
    fn new(output: LoginOutput, message: &'static str) -> Self {
        let (access_token, refresh_token, expires_in) = match output.session {
            Some(s) => (s.access_token, s.refresh_token, s.expires_in),
            None => (String::new(), String::new(), 0),
        };
        Self {
            user: output.user.into(),
            access_token,
            refresh_token,
            expires_in,
            token_type: "bearer",
            message,
            profile_complete: output.profile_complete,
        }
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct PictureResponse {
    pub message: &'static str,
    pub avatar_url: String,
}

// ── POST /auth/register ──────────────────────────────────────────────────────

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), BackendError> {
    let uc = RegisterUseCase {
        auth: state.auth(),
        utilizadores: state.utilizador_repo(),
    };
    let output = uc.execute(body.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(LoginResponse::new(output, "Conta criada com sucesso")),
    ))
}

// ── POST /auth/signup ────────────────────────────────────────────────────────

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    let uc = SignUpUseCase { auth: state.auth() };
    let user = uc.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, BackendError> {
    let uc = LoginUseCase {
        auth: state.auth(),
        utilizadores: state.utilizador_repo(),
    };
    let output = uc.execute(body.email.trim(), &body.password).await?;
    Ok(Json(LoginResponse::new(output, "Login realizado com sucesso")))
}

// ── POST /auth/logout ────────────────────────────────────────────────────────

pub async fn logout(
    State(state): State<AppState>,
    token: Option<BearerToken>,
) -> Result<Json<MessageResponse>, BackendError> {
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
) -> Result<Json<UserResponse>, BackendError> {
    let uc = CurrentUserUseCase { auth: state.auth() };
    let user = uc.execute(token.as_str()).await?;
    Ok(Json(user.into()))
}

// ── PATCH /auth/me/name ──────────────────────────────────────────────────────

pub async fn update_name(
    State(state): State<AppState>,
    token: BearerToken,
    Json(body): Json<UpdateNameRequest>,
) -> Result<Json<UserResponse>, BackendError> {
    let uc = UpdateNameUseCase {
        auth: state.auth(),
        utilizadores: state.utilizador_repo(),
    };
    let user = uc.execute(token.as_str(), &body.name).await?;
    Ok(Json(user.into()))
}

// ── PATCH /auth/me/picture ───────────────────────────────────────────────────

pub async fn update_picture(
    State(state): State<AppState>,
    token: BearerToken,
    Json(body): Json<UpdatePictureRequest>,
) -> Result<Json<PictureResponse>, BackendError> {
    let uc = UpdatePictureUseCase { auth: state.auth() };
    let avatar_url = uc.execute(token.as_str(), &body.url).await?;
    Ok(Json(PictureResponse {
        message: "Foto de perfil atualizada",
        avatar_url,
    }))
}
