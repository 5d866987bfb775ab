use nomnom_domain::error::DomainError;
use nomnom_domain::profile::RawProfile;

use crate::domain::repository::UtilizadorRepository;
use crate::domain::types::Utilizador;
use crate::error::AccountsError;

fn require_email(email: &str) -> Result<&str, AccountsError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(DomainError::MissingField("email").into());
    }
    Ok(email)
}

// ── CheckUtilizador ──────────────────────────────────────────────────────────

pub struct CheckUtilizadorUseCase<R: UtilizadorRepository> {
    pub repo: R,
}

impl<R: UtilizadorRepository> CheckUtilizadorUseCase<R> {
    pub async fn execute(&self, email: &str) -> Result<Option<Utilizador>, AccountsError> {
        self.repo.find_by_email(email).await
    }
}

// ── CreateUtilizador ─────────────────────────────────────────────────────────

/// Create a complete profile. Every field is required.
pub struct CreateUtilizadorUseCase<R: UtilizadorRepository> {
    pub repo: R,
}

impl<R: UtilizadorRepository> CreateUtilizadorUseCase<R> {
    pub async fn execute(&self, email: &str, raw: RawProfile) -> Result<Utilizador, AccountsError> {
        let email = require_email(email)?;
        let patch = raw.validate_complete()?;
        if self.repo.find_by_email(email).await?.is_some() {
            return Err(AccountsError::UtilizadorExists);
        }
        self.repo.insert(email, &patch).await
    }
}

// ── GetUtilizador ────────────────────────────────────────────────────────────

pub struct GetUtilizadorUseCase<R: UtilizadorRepository> {
    pub repo: R,
}

impl<R: UtilizadorRepository> GetUtilizadorUseCase<R> {
    pub async fn execute(&self, email: &str) -> Result<Utilizador, AccountsError> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or(AccountsError::UtilizadorNotFound)
    }
}

// ── UpdateUtilizador ─────────────────────────────────────────────────────────

/// Update an existing profile; never inserts.
pub struct UpdateUtilizadorUseCase<R: UtilizadorRepository> {
    pub repo: R,
}

impl<R: UtilizadorRepository> UpdateUtilizadorUseCase<R> {
    pub async fn execute(&self, email: &str, raw: RawProfile) -> Result<Utilizador, AccountsError> {
        let patch = raw.validate()?;
        if self.repo.find_by_email(email).await?.is_none() {
            return Err(AccountsError::UtilizadorNotFound);
        }
        if patch.is_empty() {
            return Err(DomainError::EmptyUpdate.into());
        }
        // The row can vanish between the lookup and the write.
        self.repo
            .update(email, &patch)
            .await?
            .ok_or(AccountsError::UtilizadorNotFound)
    }
}
