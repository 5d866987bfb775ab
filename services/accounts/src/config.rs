use std::time::Duration;

use serde::Deserialize;

use nomnom_core::config::{Config, split_list};
use nomnom_supabase::SupabaseConfig;

/// Accounts service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct AccountsConfig {
    pub supabase_url: String,
    pub supabase_key: String,
    #[serde(default = "default_host")]
    pub api_host: String,
    /// TCP port for the HTTP server (default 8001). Env var: `API_PORT`.
    #[serde(default = "default_port")]
    pub api_port: u16,
    #[serde(default = "default_debug")]
    pub debug: bool,
    #[serde(default = "default_timeout_secs")]
    pub supabase_timeout_secs: u64,
    #[serde(default)]
    pub cors_allowed_origins: String,
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    8001
}

fn default_debug() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config for AccountsConfig {}

impl AccountsConfig {
    pub fn supabase(&self) -> SupabaseConfig {
        SupabaseConfig {
            url: self.supabase_url.clone(),
            key: self.supabase_key.clone(),
            timeout: Duration::from_secs(self.supabase_timeout_secs),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    pub fn cors_origins(&self) -> Vec<String> {
        split_list(&self.cors_allowed_origins)
    }
}
