#![allow(async_fn_in_trait)]

use nomnom_domain::profile::ProfilePatch;

use crate::domain::types::{
    AuthSession, FavoriteRelation, Identity, Ingrediente, MetadataPatch, NewIngrediente, Receita,
    RecipeFilter, RecipeIngredient, SignUpResult, StockEntry, StockLine, Utilizador,
};
use crate::error::BackendError;

/// Port for the hosted auth provider.
pub trait AuthProvider: Send + Sync {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<SignUpResult, BackendError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, BackendError>;

    /// Revoke the session behind `access_token`.
    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError>;

    /// Resolve the identity owning `access_token`. `InvalidToken` when rejected.
    async fn current_user(&self, access_token: &str) -> Result<Identity, BackendError>;

    async fn update_metadata(
        &self,
        user_id: &str,
        patch: &MetadataPatch,
    ) -> Result<Identity, BackendError>;
}

/// Repository for `Utilizador` profiles.
pub trait UtilizadorRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Utilizador>, BackendError>;

    async fn insert(&self, email: &str, patch: &ProfilePatch) -> Result<Utilizador, BackendError>;

    /// Returns the updated row, or `None` when no row matched.
    async fn update(
        &self,
        email: &str,
        patch: &ProfilePatch,
    ) -> Result<Option<Utilizador>, BackendError>;
}

pub trait IngredientRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Ingrediente>, BackendError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Ingrediente>, BackendError>;
    async fn create(&self, ingrediente: &NewIngrediente) -> Result<Ingrediente, BackendError>;
}

/// Repository for one of the per-user ingredient tables (inventory or shopping list).
pub trait StockRepository: Send + Sync {
    async fn list(&self, user: &str) -> Result<Vec<StockEntry>, BackendError>;

    async fn find(&self, user: &str, ingredient: i64) -> Result<Option<StockLine>, BackendError>;

    async fn insert(&self, line: &StockLine) -> Result<StockLine, BackendError>;

    /// Returns the updated row, or `None` when no row matched.
    async fn set_quantity(
        &self,
        user: &str,
        ingredient: i64,
        quantidade: i64,
    ) -> Result<Option<StockLine>, BackendError>;

    async fn remove(&self, user: &str, ingredient: i64) -> Result<(), BackendError>;

    async fn clear(&self, user: &str) -> Result<(), BackendError>;
}

pub trait RecipeRepository: Send + Sync {
    async fn list(&self, filter: &RecipeFilter) -> Result<Vec<Receita>, BackendError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Receita>, BackendError>;

    /// `ReceitaIngrediente` rows for the given recipes.
    async fn ingredient_lines(
        &self,
        recipe_ids: &[i64],
    ) -> Result<Vec<RecipeIngredient>, BackendError>;
}

/// Repository for the sparse `ReceitaUtilizador` relation.
pub trait FavoriteRepository: Send + Sync {
    async fn relations(&self, user: &str) -> Result<Vec<FavoriteRelation>, BackendError>;

    async fn find(
        &self,
        user: &str,
        recipe_id: i64,
    ) -> Result<Option<FavoriteRelation>, BackendError>;

    async fn insert(&self, relation: &FavoriteRelation) -> Result<FavoriteRelation, BackendError>;

    async fn set_favorita(
        &self,
        user: &str,
        recipe_id: i64,
        favorita: bool,
    ) -> Result<FavoriteRelation, BackendError>;
}
