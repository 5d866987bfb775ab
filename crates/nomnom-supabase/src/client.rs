use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::auth::AuthClient;
use crate::error::RemoteError;
use crate::query::QueryBuilder;

const APIKEY_HEADER: &str = "apikey";

/// Connection settings for the hosted platform.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// API key sent as `apikey` and as the default bearer.
    pub key: String,
    pub timeout: Duration,
}

/// Cheaply clonable handle to the platform. Construct once at startup and
/// share through application state.
#[derive(Clone)]
pub struct SupabaseClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Self::with_http(http, &config.url, &config.key)
    }

    /// Build around an existing `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, url: &str, key: &str) -> Result<Self, RemoteError> {
        let base_url =
            Url::parse(url.trim_end_matches('/')).map_err(|e| RemoteError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::InvalidUrl(url.to_owned()));
        }
        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url,
                api_key: key.to_owned(),
            }),
        })
    }

    /// Start a query against `table`.
    pub fn from(&self, table: &str) -> QueryBuilder {
        QueryBuilder::new(self.clone(), table)
    }

    pub fn auth(&self) -> AuthClient {
        AuthClient::new(self.clone())
    }

    /// `{base}/{segments...}`; each segment is percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.inner.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Request authorised with the project API key.
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.request_as(method, url, &self.inner.api_key)
    }

    /// Request authorised with a caller-supplied bearer (a user's access token).
    pub(crate) fn request_as(&self, method: Method, url: Url, bearer: &str) -> RequestBuilder {
        self.inner
            .http
            .request(method, url)
            .header(APIKEY_HEADER, self.inner.api_key.as_str())
            .bearer_auth(bearer)
    }
}

/// Decode a JSON success body, or classify the failure with `classify`.
pub(crate) async fn read_json<T: DeserializeOwned>(
    resp: Response,
    classify: fn(StatusCode, &str) -> RemoteError,
) -> Result<T, RemoteError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(classify(status, &body));
    }
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Succeed on any 2xx, discarding the body.
pub(crate) async fn expect_success(
    resp: Response,
    classify: fn(StatusCode, &str) -> RemoteError,
) -> Result<(), RemoteError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    let body = resp.text().await.unwrap_or_default();
    Err(classify(status, &body))
}
