#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use techhive_users::domain::store::UserStore;
use techhive_users::routes::app_router;
use techhive_users::state::AppState;

pub const TEST_TOKEN: &str = "test-api-token";
pub const DOCS_PREFIX: &str = "/swagger";

/// Builds a test server running the fully composed router (all three
/// middleware stages included), optionally pre-seeded with the two startup
/// users.
pub fn make_server(seeded: bool) -> TestServer {
    let store = Arc::new(UserStore::new());
    if seeded {
        store.seed();
    }

    let state = AppState {
        store,
        api_token: Arc::new(TEST_TOKEN.to_string()),
        docs_path_prefix: Arc::new(DOCS_PREFIX.to_string()),
    };

    TestServer::new(app_router(state)).unwrap()
}

/// `Authorization` header value for the test token.
pub fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
}
