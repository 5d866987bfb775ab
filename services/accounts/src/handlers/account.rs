use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use nomnom_domain::paging::LimitOffset;

use crate::domain::types::Account;
use crate::error::AccountsError;
use crate::state::AppState;
use crate::usecase::account::{
    CreateAccountInput, CreateAccountUseCase, DeleteAccountUseCase, GetAccountUseCase,
    ListAccountsUseCase, UpdateAccountUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateAccountRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(serialize_with = "nomnom_core::serde::to_rfc3339_ms_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            name: account.name,
            created_at: account.created_at,
        }
    }
}

// ── POST /accounts ───────────────────────────────────────────────────────────

pub async fn create_account(
    State(state): State<AppState>,
    Json(body): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AccountsError> {
    let uc = CreateAccountUseCase { auth: state.auth() };
    let account = uc
        .execute(CreateAccountInput {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(account.into())))
}

// ── GET /accounts?limit=&offset= ─────────────────────────────────────────────

pub async fn list_accounts(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<AccountResponse>>, AccountsError> {
    let page: LimitOffset = match raw_query.as_deref() {
        Some(q) => serde_qs::from_str(q).map_err(|_| AccountsError::InvalidQuery)?,
        None => LimitOffset::default(),
    };
    let uc = ListAccountsUseCase {
        repo: state.account_repo(),
    };
    let accounts = uc.execute(page).await?;
    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

// ── GET /accounts/{id} ───────────────────────────────────────────────────────

pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AccountResponse>, AccountsError> {
    let uc = GetAccountUseCase {
        repo: state.account_repo(),
    };
    Ok(Json(uc.execute(&id).await?.into()))
}

// ── PUT /accounts/{id} ───────────────────────────────────────────────────────

pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateAccountRequest>,
) -> Result<Json<AccountResponse>, AccountsError> {
    let uc = UpdateAccountUseCase {
        repo: state.account_repo(),
    };
    let account = uc
        .execute(&id, body.name.as_deref(), body.email.as_deref())
        .await?;
    Ok(Json(account.into()))
}

// ── DELETE /accounts/{id} ────────────────────────────────────────────────────

pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AccountsError> {
    let uc = DeleteAccountUseCase {
        repo: state.account_repo(),
    };
    uc.execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
