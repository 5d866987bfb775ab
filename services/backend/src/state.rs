use nomnom_supabase::SupabaseClient;

use crate::domain::types::StockTable;
use crate::infra::auth::SupabaseAuthProvider;
use crate::infra::db::{
    SupabaseFavoriteRepository, SupabaseIngredientRepository, SupabaseRecipeRepository,
    SupabaseStockRepository, SupabaseUtilizadorRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub supabase: SupabaseClient,
}

impl AppState {
    pub fn auth(&self) -> SupabaseAuthProvider {
        SupabaseAuthProvider {
            client: self.supabase.clone(),
        }
    }

    pub fn utilizador_repo(&self) -> SupabaseUtilizadorRepository {
        SupabaseUtilizadorRepository {
            client: self.supabase.clone(),
        }
    }

    pub fn ingredient_repo(&self) -> SupabaseIngredientRepository {
        SupabaseIngredientRepository {
            client: self.supabase.clone(),
        }
    }

    pub fn inventory_repo(&self) -> SupabaseStockRepository {
        SupabaseStockRepository {
            client: self.supabase.clone(),
            table: StockTable::Inventario,
        }
    }

    pub fn shopping_list_repo(&self) -> SupabaseStockRepository {
        SupabaseStockRepository {
            client: self.supabase.clone(),
            table: StockTable::ListaCompras,
        }
    }

    pub fn recipe_repo(&self) -> SupabaseRecipeRepository {
        SupabaseRecipeRepository {
            client: self.supabase.clone(),
        }
    }

    pub fn favorite_repo(&self) -> SupabaseFavoriteRepository {
        SupabaseFavoriteRepository {
            client: self.supabase.clone(),
        }
    }
}
