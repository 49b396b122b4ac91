//! Common test utilities and helpers.

use axum::Router;
use axum_test::TestServer;
use url::Url;
use ynr::config::ApiConfig;
use ynr::store::Store;
use ynr::{api, AppState};

const PUBLIC_URL: &str = "http://candidates.test";

/// Load the shared sample dataset.
pub fn sample_store() -> Store {
    Store::from_json(include_str!("../../fixtures/sample.json"))
        .expect("Failed to load sample dataset")
}

/// Build a test server over the given store with default API settings.
pub fn build_test_server(store: Store) -> TestServer {
    build_test_server_with(store, ApiConfig::default())
}

pub fn build_test_server_with(store: Store, api_config: ApiConfig) -> TestServer {
    let public_url = Url::parse(PUBLIC_URL).expect("Invalid public URL");
    let state = AppState::with_store(store, api_config, public_url);

    let app = Router::new().merge(api::routes()).with_state(state);

    TestServer::new(app).expect("Failed to create test server")
}
