//! Inventory and shopping-list rows keyed by `(idUtilizador, idIngrediente)`.
//!
//! Every add is a check-then-write against the table store and is not atomic;
//! concurrent adds for the same pair may lose an increment.

use nomnom_domain::error::DomainError;

use crate::domain::repository::StockRepository;
use crate::domain::types::{StockEntry, StockLine, UpsertOutcome};
use crate::error::BackendError;

fn require_user(user: &str) -> Result<&str, BackendError> {
    let user = user.trim();
    if user.is_empty() {
        return Err(BackendError::MissingEmail);
    }
    Ok(user)
}

// ── ListStock ────────────────────────────────────────────────────────────────

pub struct ListStockUseCase<S: StockRepository> {
    pub repo: S,
}

impl<S: StockRepository> ListStockUseCase<S> {
    /// Lines whose ingredient no longer resolves are dropped.
    pub async fn execute(&self, user: &str) -> Result<Vec<StockEntry>, BackendError> {
        let entries = self.repo.list(require_user(user)?).await?;
        Ok(entries
            .into_iter()
            .filter(|e| e.ingrediente.is_some())
            .collect())
    }
}

// ── AddStock ─────────────────────────────────────────────────────────────────

pub struct AddStockUseCase<S: StockRepository> {
    pub repo: S,
}

impl<S: StockRepository> AddStockUseCase<S> {
    pub async fn execute(
        &self,
        user: &str,
        ingredient: i64,
        delta: i64,
    ) -> Result<UpsertOutcome, BackendError> {
        let user = require_user(user)?;
        if delta <= 0 {
            return Err(DomainError::InvalidQuantity.into());
        }

        if let Some(existing) = self.repo.find(user, ingredient).await? {
            let total = existing
                .quantidade
                .checked_add(delta)
                .ok_or(DomainError::InvalidQuantity)?;
            let line = self
                .repo
                .set_quantity(user, ingredient, total)
                .await?
                // Removed between the read and the write.
                .ok_or(BackendError::StockItemNotFound)?;
            return Ok(UpsertOutcome::Incremented(line));
        }

        let line = self
            .repo
            .insert(&StockLine {
                id_utilizador: user.to_owned(),
                id_ingrediente: ingredient,
                quantidade: delta,
            })
            .await?;
        Ok(UpsertOutcome::Inserted(line))
    }
}

// ── SetStockQuantity ─────────────────────────────────────────────────────────

/// Replace the quantity of an existing row. Never creates.
pub struct SetStockQuantityUseCase<S: StockRepository> {
    pub repo: S,
}

impl<S: StockRepository> SetStockQuantityUseCase<S> {
    pub async fn execute(
        &self,
        user: &str,
        ingredient: i64,
        quantidade: i64,
    ) -> Result<StockLine, BackendError> {
        let user = require_user(user)?;
        if quantidade < 0 {
            return Err(DomainError::InvalidQuantity.into());
        }
        self.repo
            .set_quantity(user, ingredient, quantidade)
            .await?
            .ok_or(BackendError::StockItemNotFound)
    }
}

// ── RemoveStock ──────────────────────────────────────────────────────────────

pub struct RemoveStockUseCase<S: StockRepository> {
    pub repo: S,
}

impl<S: StockRepository> RemoveStockUseCase<S> {
    /// Idempotent.
    pub async fn execute(&self, user: &str, ingredient: i64) -> Result<(), BackendError> {
        self.repo.remove(require_user(user)?, ingredient).await
    }
}

// ── ClearStock ───────────────────────────────────────────────────────────────

pub struct ClearStockUseCase<S: StockRepository> {
    pub repo: S,
}

impl<S: StockRepository> ClearStockUseCase<S> {
    pub async fn execute(&self, user: &str) -> Result<(), BackendError> {
        self.repo.clear(require_user(user)?).await
    }
}
