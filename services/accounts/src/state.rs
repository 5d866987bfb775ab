use nomnom_supabase::SupabaseClient;

use crate::infra::auth::SupabaseAuthProvider;
use crate::infra::db::{SupabaseAccountRepository, SupabaseUtilizadorRepository};

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

    pub fn account_repo(&self) -> SupabaseAccountRepository {
        SupabaseAccountRepository {
            client: self.supabase.clone(),
        }
    }

    pub fn utilizador_repo(&self) -> SupabaseUtilizadorRepository {
        SupabaseUtilizadorRepository {
            client: self.supabase.clone(),
        }
    }
}
