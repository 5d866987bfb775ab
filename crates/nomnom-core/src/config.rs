/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; field names map to upper-cased
/// env vars (`supabase_url` ← `SUPABASE_URL`). A `.env` file in the working
/// directory is loaded first when present, without overriding real env vars.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Result<Self, envy::Error> {
        let _ = dotenv::dotenv();
        envy::from_env()
    }

    /// Build from explicit key/value pairs instead of the process environment.
    fn from_pairs<I, K, V>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        envy::from_iter(pairs.into_iter().map(|(k, v)| (k.into(), v.into())))
    }
}

/// Split a comma-separated env value into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
