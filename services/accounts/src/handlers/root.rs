use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub docs: &'static str,
}

pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Account Management API",
        version: env!("CARGO_PKG_VERSION"),
        docs: "/docs",
    })
}
