use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use nomnom_core::health::{health, healthz, readyz};
use nomnom_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    auth::{login, logout, me, register, signup, update_name, update_picture},
    ingrediente::{
        add_to_inventory, create_ingrediente, get_inventory, list_ingredientes,
        remove_from_inventory, update_inventory_quantity,
    },
    lista_compras::{
        add_to_lista_compras, clear_lista_compras, get_lista_compras, remove_from_lista_compras,
    },
    receita::{
        get_receita, list_minhas, list_outras, list_outras_filtradas, list_receitas,
        toggle_favorito,
    },
    root::root,
    utilizador::{get_enum_options, get_utilizador, upsert_utilizador, upsert_utilizador_from_body},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Auth
        .route("/auth/register", post(register))
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
        .route("/auth/me/name", patch(update_name))
        .route("/auth/me/picture", patch(update_picture))
        // Utilizador
        .route("/utilizador", post(upsert_utilizador_from_body))
        .route("/utilizador/options/enums", get(get_enum_options))
        .route("/utilizador/{email}", get(get_utilizador).put(upsert_utilizador))
        .route("/utilizador/{email}/profile", post(upsert_utilizador))
        // Ingredientes
        .route("/ingredientes", get(list_ingredientes).post(create_ingrediente))
        .route(
            "/ingredientes/inventario",
            post(add_to_inventory)
                .patch(update_inventory_quantity)
                .delete(remove_from_inventory),
        )
        .route("/ingredientes/inventario/{email}", get(get_inventory))
        // Receitas
        .route("/receitas", get(list_receitas))
        .route("/receitas/minhas", get(list_minhas))
        .route("/receitas/outras", get(list_outras))
        .route("/receitas/outras/filtradas", get(list_outras_filtradas))
        .route("/receitas/{id}", get(get_receita))
        .route("/receitas/{id}/favorito", post(toggle_favorito))
        // Lista de compras
        .route("/lista-compras", post(add_to_lista_compras))
        .route("/lista-compras/", post(add_to_lista_compras))
        .route("/lista-compras/usuario/{email}", get(get_lista_compras).delete(clear_lista_compras))
        .route("/lista-compras/item/{id}/{email}", delete(remove_from_lista_compras));

    Router::new()
        .route("/", get(root))
        // Health
        .route("/health", get(health))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
