//! Shared helpers for client integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::json;
use stylematch_client::{ClientConfig, StyleMatchClient};
use stylematch_common::{Credentials, LocaleProvider, MemoryCredentialStore};
use wiremock::MockServer;

/// Initialize test logging once; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// A client wired against a mock backend with in-memory state.
pub struct TestClient {
    pub server: MockServer,
    pub client: StyleMatchClient,
    pub store: Arc<MemoryCredentialStore>,
    pub locale: Arc<LocaleProvider>,
}

impl TestClient {
    /// Start a mock server and a client with an empty credential store.
    pub async fn start() -> Self {
        Self::start_with_store(Arc::new(MemoryCredentialStore::new())).await
    }

    /// Start a mock server and a client holding the given stale tokens.
    pub async fn start_logged_in(access_token: &str, refresh_token: &str) -> Self {
        Self::start_with_store(Arc::new(MemoryCredentialStore::with_credentials(
            Credentials::new(access_token, refresh_token, "stylist"),
        )))
        .await
    }

    async fn start_with_store(store: Arc<MemoryCredentialStore>) -> Self {
        init_tracing();

        let server = MockServer::start().await;
        let config = ClientConfig::new(server.uri()).expect("config should build");
        let locale = Arc::new(LocaleProvider::in_memory());
        let client = StyleMatchClient::new(config, store.clone(), locale.clone())
            .expect("client should build");

        Self { server, client, store, locale }
    }
}

/// Wrap a payload in the backend's success envelope.
pub fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "code": 0, "message": "OK", "data": data })
}
