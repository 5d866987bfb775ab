use axum_test::TestServer;
use wiremock::MockServer;

use nomnom_accounts::router::build_router;
use nomnom_accounts::state::AppState;
use nomnom_testing::platform::mock_platform;

pub async fn setup() -> (MockServer, TestServer) {
    let (platform, supabase) = mock_platform().await;
    let server = TestServer::new(build_router(AppState { supabase })).expect("test server");
    (platform, server)
}
