//! Bearer headers for endpoints that forward the caller's access token.

use http::{HeaderName, HeaderValue};

pub const TEST_ACCESS_TOKEN: &str = "test-access-token";

/// Configurable bearer identity injected into test requests.
pub struct MockAuth {
    pub access_token: String,
}

impl MockAuth {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    /// `Authorization: Bearer <token>` as a header pair, for `axum-test`.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        let value = HeaderValue::from_str(&format!("Bearer {}", self.access_token))
            .unwrap_or_else(|_| HeaderValue::from_static("Bearer invalid"));
        (http::header::AUTHORIZATION, value)
    }
}

impl Default for MockAuth {
    fn default() -> Self {
        Self::new(TEST_ACCESS_TOKEN)
    }
}
