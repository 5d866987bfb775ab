use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub docs: &'static str,
}

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Bem-vindo à NomNom API",
        version: env!("CARGO_PKG_VERSION"),
        docs: "/docs",
    })
}
