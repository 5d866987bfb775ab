use tracing::info;

use nomnom_core::config::Config as _;
use nomnom_core::middleware::cors_layer;
use nomnom_core::tracing::{default_directive, init_tracing};
use nomnom_supabase::SupabaseClient;

use nomnom_accounts::config::AccountsConfig;
use nomnom_accounts::router::build_router;
use nomnom_accounts::state::AppState;

#[tokio::main]
async fn main() {
    let config = AccountsConfig::from_env().expect("invalid accounts configuration");
    init_tracing(default_directive(config.debug));

    let supabase = SupabaseClient::new(&config.supabase()).expect("failed to build supabase client");
    let state = AppState { supabase };

    let router = build_router(state).layer(cors_layer(&config.cors_origins()));
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("accounts listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
