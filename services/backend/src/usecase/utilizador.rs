use nomnom_domain::profile::RawProfile;

use crate::domain::repository::UtilizadorRepository;
use crate::domain::types::Utilizador;
use crate::error::BackendError;

// ── GetUtilizador ────────────────────────────────────────────────────────────

pub struct GetUtilizadorUseCase<R: UtilizadorRepository> {
    pub repo: R,
}

impl<R: UtilizadorRepository> GetUtilizadorUseCase<R> {
    pub async fn execute(&self, email: &str) -> Result<Utilizador, BackendError> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or(BackendError::UtilizadorNotFound)
    }
}

// ── UpsertUtilizador ─────────────────────────────────────────────────────────

/// Validate the given fields, update the row, and insert it when no row matched.
pub struct UpsertUtilizadorUseCase<R: UtilizadorRepository> {
    pub repo: R,
}

impl<R: UtilizadorRepository> UpsertUtilizadorUseCase<R> {
    pub async fn execute(&self, email: &str, raw: RawProfile) -> Result<Utilizador, BackendError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(BackendError::MissingEmail);
        }
        let patch = raw.validate()?;

        // Nothing to write; just make sure the row exists.
        if patch.is_empty() {
            if let Some(row) = self.repo.find_by_email(email).await? {
                return Ok(row);
            }
            return self.repo.insert(email, &patch).await;
        }

        match self.repo.update(email, &patch).await? {
            Some(row) => Ok(row),
            None => self.repo.insert(email, &patch).await,
        }
    }
}
