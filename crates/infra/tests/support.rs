#![allow(dead_code)]

use std::sync::Arc;

use bizhub_core::KeyValueStore;
use bizhub_domain::constants::SESSION_TOKEN_STORAGE_KEY;
use bizhub_infra::api::{ApiClient, ApiClientConfig, StoredTokenProvider};
use bizhub_infra::MemoryKeyValueStore;
use wiremock::MockServer;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// API client wired to a mock server and an in-memory token store.
pub struct TestApi {
    pub server: MockServer,
    pub store: Arc<MemoryKeyValueStore>,
    pub client: Arc<ApiClient>,
}

impl TestApi {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryKeyValueStore::new());
        let config = ApiClientConfig {
            base_url: server.uri(),
            origin: TEST_ORIGIN.to_string(),
            ..Default::default()
        };
        let client = ApiClient::new(config, Arc::new(StoredTokenProvider::new(store.clone())))
            .expect("api client should build");
        Self { server, store, client: Arc::new(client) }
    }

    pub fn sign_in(&self, token: &str) {
        self.store.set(SESSION_TOKEN_STORAGE_KEY, token).expect("token should be stored");
    }

    pub async fn request_count(&self, method: &str, path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.method.to_string() == method && r.url.path() == path)
            .count()
    }
}
