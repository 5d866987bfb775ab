use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use nomnom_core::health::{health, healthz, readyz};
use nomnom_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    account::{create_account, delete_account, get_account, list_accounts, update_account},
    auth::{login, logout, me},
    root::root,
    utilizador::{
        check_utilizador, create_utilizador, get_enum_options, get_utilizador, update_utilizador,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Auth
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
        // Accounts
        .route("/accounts", post(create_account).get(list_accounts))
        .route("/accounts/", post(create_account).get(list_accounts))
        .route(
            "/accounts/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
        // Utilizador
        .route("/utilizador", post(create_utilizador))
        .route("/utilizador/", post(create_utilizador))
        .route("/utilizador/options/enums", get(get_enum_options))
        .route("/utilizador/check/{email}", get(check_utilizador))
        .route("/utilizador/{email}", get(get_utilizador).put(update_utilizador));

    Router::new()
        .route("/", get(root))
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
