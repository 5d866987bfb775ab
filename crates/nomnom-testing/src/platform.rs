//! In-process fake of the hosted platform.
//!
//! Tests mount `wiremock` expectations on the returned server, and hand the
//! client to the service under test.

use nomnom_supabase::SupabaseClient;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-service-key";

/// Start a mock server and a client pointed at it.
pub async fn mock_platform() -> (MockServer, SupabaseClient) {
    let server = MockServer::start().await;
    let client = SupabaseClient::with_http(reqwest::Client::new(), &server.uri(), TEST_API_KEY)
        .expect("mock server uri is a valid base url");
    (server, client)
}

/// PostgREST path for `table`.
pub fn rest_path(table: &str) -> String {
    format!("/rest/v1/{table}")
}
