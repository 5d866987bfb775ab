use anyhow::Context as _;
use serde::Serialize;
use serde_json::json;

use nomnom_domain::profile::ProfilePatch;
use nomnom_supabase::SupabaseClient;

use crate::domain::repository::{
    FavoriteRepository, IngredientRepository, RecipeRepository, StockRepository,
    UtilizadorRepository,
};
use crate::domain::types::{
    FavoriteRelation, Ingrediente, NewIngrediente, Receita, RecipeFilter, RecipeIngredient,
    StockEntry, StockLine, StockTable, Utilizador,
};
use crate::error::BackendError;

const UTILIZADOR: &str = "Utilizador";
const INGREDIENTE: &str = "Ingrediente";
const RECEITA: &str = "Receita";
const RECEITA_INGREDIENTE: &str = "ReceitaIngrediente";
const RECEITA_UTILIZADOR: &str = "ReceitaUtilizador";

// ── Utilizador repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct SupabaseUtilizadorRepository {
    pub client: SupabaseClient,
}

#[derive(Serialize)]
struct UtilizadorInsert<'a> {
    email: &'a str,
    #[serde(flatten)]
    patch: &'a ProfilePatch,
}

impl UtilizadorRepository for SupabaseUtilizadorRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Utilizador>, BackendError> {
        let row = self
            .client
            .from(UTILIZADOR)
            .eq("email", email)
            .maybe_single()
            .await
            .context("find utilizador by email")?;
        Ok(row)
    }

    async fn insert(&self, email: &str, patch: &ProfilePatch) -> Result<Utilizador, BackendError> {
        let rows: Vec<Utilizador> = self
            .client
            .from(UTILIZADOR)
            .insert(&UtilizadorInsert { email, patch })
            .await
            .context("insert utilizador")?;
        Ok(rows.into_iter().next().context("insert utilizador returned no row")?)
    }

    async fn update(
        &self,
        email: &str,
        patch: &ProfilePatch,
    ) -> Result<Option<Utilizador>, BackendError> {
        let rows: Vec<Utilizador> = self
            .client
            .from(UTILIZADOR)
            .eq("email", email)
            .update(patch)
            .await
            .context("update utilizador")?;
        Ok(rows.into_iter().next())
    }
}

// ── Ingredient repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct SupabaseIngredientRepository {
    pub client: SupabaseClient,
}

impl IngredientRepository for SupabaseIngredientRepository {
    async fn list(&self) -> Result<Vec<Ingrediente>, BackendError> {
        let rows = self
            .client
            .from(INGREDIENTE)
            .order("id", true)
            .execute()
            .await
            .context("list ingredientes")?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ingrediente>, BackendError> {
        let row = self
            .client
            .from(INGREDIENTE)
            .eq("id", id)
            .maybe_single()
            .await
            .context("find ingrediente by id")?;
        Ok(row)
    }

    async fn create(&self, ingrediente: &NewIngrediente) -> Result<Ingrediente, BackendError> {
        let rows: Vec<Ingrediente> = self
            .client
            .from(INGREDIENTE)
            .insert(ingrediente)
            .await
            .context("insert ingrediente")?;
        Ok(rows.into_iter().next().context("insert ingrediente returned no row")?)
    }
}

// ── Stock repository (Inventario / ListaCompras) ────────────────────────────

#[derive(Clone)]
pub struct SupabaseStockRepository {
    pub client: SupabaseClient,
    pub table: StockTable,
}

const STOCK_WITH_INGREDIENT: &str = "idUtilizador, idIngrediente, quantidade, \
     Ingrediente(id, nome, grupo_alimentar, unidade_medida, calorias)";

impl StockRepository for SupabaseStockRepository {
    async fn list(&self, user: &str) -> Result<Vec<StockEntry>, BackendError> {
        let rows = self
            .client
            .from(self.table.table_name())
            .select(STOCK_WITH_INGREDIENT)
            .eq("idUtilizador", user)
            .execute()
            .await
            .with_context(|| format!("list {}", self.table.table_name()))?;
        Ok(rows)
    }

    async fn find(&self, user: &str, ingredient: i64) -> Result<Option<StockLine>, BackendError> {
        let row = self
            .client
            .from(self.table.table_name())
            .eq("idUtilizador", user)
            .eq("idIngrediente", ingredient)
            .maybe_single()
            .await
            .with_context(|| format!("find {} line", self.table.table_name()))?;
        Ok(row)
    }

    async fn insert(&self, line: &StockLine) -> Result<StockLine, BackendError> {
        let rows: Vec<StockLine> = self
            .client
            .from(self.table.table_name())
            .insert(line)
            .await
            .with_context(|| format!("insert {} line", self.table.table_name()))?;
        Ok(rows
            .into_iter()
            .next()
            .with_context(|| format!("insert {} returned no row", self.table.table_name()))?)
    }

    async fn set_quantity(
        &self,
        user: &str,
        ingredient: i64,
        quantidade: i64,
    ) -> Result<Option<StockLine>, BackendError> {
        let rows: Vec<StockLine> = self
            .client
            .from(self.table.table_name())
            .eq("idUtilizador", user)
            .eq("idIngrediente", ingredient)
            .update(&json!({ "quantidade": quantidade }))
            .await
            .with_context(|| format!("update {} quantity", self.table.table_name()))?;
        Ok(rows.into_iter().next())
    }

    async fn remove(&self, user: &str, ingredient: i64) -> Result<(), BackendError> {
        self.client
            .from(self.table.table_name())
            .eq("idUtilizador", user)
            .eq("idIngrediente", ingredient)
            .delete()
            .await
            .with_context(|| format!("delete {} line", self.table.table_name()))?;
        Ok(())
    }

    async fn clear(&self, user: &str) -> Result<(), BackendError> {
        let removed = self
            .client
            .from(self.table.table_name())
            .eq("idUtilizador", user)
            .delete()
            .await
            .with_context(|| format!("clear {}", self.table.table_name()))?;
        tracing::debug!(table = self.table.table_name(), removed, "cleared");
        Ok(())
    }
}

// ── Recipe repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct SupabaseRecipeRepository {
    pub client: SupabaseClient,
}

impl RecipeRepository for SupabaseRecipeRepository {
    async fn list(&self, filter: &RecipeFilter) -> Result<Vec<Receita>, BackendError> {
        let mut query = self.client.from(RECEITA);
        if let Some(v) = &filter.dificuldade {
            query = query.eq("dificuldade", v);
        }
        if let Some(v) = &filter.categoria {
            query = query.eq("categoria", v);
        }
        if let Some(v) = &filter.tipo_cozinhado {
            query = query.eq("tipo_cozinhado", v);
        }
        if let Some(v) = filter.tempo_min {
            query = query.gte("tempo", v);
        }
        if let Some(v) = filter.tempo_max {
            query = query.lte("tempo", v);
        }
        if let Some(v) = filter.porcoes_min {
            query = query.gte("porcoes", v);
        }
        if let Some(v) = filter.porcoes_max {
            query = query.lte("porcoes", v);
        }
        let rows = query
            .order("id", true)
            .execute()
            .await
            .context("list receitas")?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Receita>, BackendError> {
        let row = self
            .client
            .from(RECEITA)
            .eq("id", id)
            .maybe_single()
            .await
            .context("find receita by id")?;
        Ok(row)
    }

    async fn ingredient_lines(
        &self,
        recipe_ids: &[i64],
    ) -> Result<Vec<RecipeIngredient>, BackendError> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = self
            .client
            .from(RECEITA_INGREDIENTE)
            .select("idReceita, idIngrediente, quantidade")
            .in_("idReceita", recipe_ids)
            .execute()
            .await
            .context("list receita ingredientes")?;
        Ok(rows)
    }
}

// ── Favorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct SupabaseFavoriteRepository {
    pub client: SupabaseClient,
}

impl FavoriteRepository for SupabaseFavoriteRepository {
    async fn relations(&self, user: &str) -> Result<Vec<FavoriteRelation>, BackendError> {
        let rows = self
            .client
            .from(RECEITA_UTILIZADOR)
            .select("idUtilizador, idReceita, favorita")
            .eq("idUtilizador", user)
            .execute()
            .await
            .context("list receita relations")?;
        Ok(rows)
    }

    async fn find(
        &self,
        user: &str,
        recipe_id: i64,
    ) -> Result<Option<FavoriteRelation>, BackendError> {
        let row = self
            .client
            .from(RECEITA_UTILIZADOR)
            .select("idUtilizador, idReceita, favorita")
            .eq("idUtilizador", user)
            .eq("idReceita", recipe_id)
            .maybe_single()
            .await
            .context("find receita relation")?;
        Ok(row)
    }

    async fn insert(&self, relation: &FavoriteRelation) -> Result<FavoriteRelation, BackendError> {
        let rows: Vec<FavoriteRelation> = self
            .client
            .from(RECEITA_UTILIZADOR)
            .insert(relation)
            .await
            .context("insert receita relation")?;
        Ok(rows.into_iter().next().context("insert receita relation returned no row")?)
    }

    async fn set_favorita(
        &self,
        user: &str,
        recipe_id: i64,
        favorita: bool,
    ) -> Result<FavoriteRelation, BackendError> {
        let rows: Vec<FavoriteRelation> = self
            .client
            .from(RECEITA_UTILIZADOR)
            .eq("idUtilizador", user)
            .eq("idReceita", recipe_id)
            .update(&json!({ "favorita": favorita }))
            .await
            .context("update receita relation")?;
        Ok(rows.into_iter().next().context("update receita relation returned no row")?)
    }
}
