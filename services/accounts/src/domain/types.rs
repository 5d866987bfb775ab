use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Auth ─────────────────────────────────────────────────────────────────────

/// Identity held by the auth provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: String,
    pub email: Option<String>,
    /// `user_metadata.name`
    pub name: Option<String>,
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

// ── Account ──────────────────────────────────────────────────────────────────

/// Row of the `profiles` projection of auth accounts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Partial write of a `profiles` row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AccountPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

// ── Utilizador ───────────────────────────────────────────────────────────────

/// Row of `Utilizador`, keyed by email.
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
    pub alimentacao: Option<String>,
    #[serde(default)]
    pub sexo: Option<String>,
}
