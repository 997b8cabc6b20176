//! # StyleMatch Client
//!
//! Typed client SDK for the StyleMatch fashion-matching admin backend.
//!
//! This crate contains:
//! - The authenticated HTTP transport with single-flight token refresh
//! - Typed resource clients (auth, members, clothing, match tasks, files)
//! - The server-sent-events client for match task progress
//! - Configuration loading (environment variables or JSON/TOML files)
//!
//! ## Architecture
//! - Domain types and errors live in `stylematch-domain`
//! - Credential and locale state live in `stylematch-common`, behind small
//!   store traits so backends are swappable
//! - [`StyleMatchClient`] wires one transport and hands out resource clients
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//!
//! use stylematch_client::{ClientConfig, StyleMatchClient};
//! use stylematch_common::{LocaleProvider, MemoryCredentialStore};
//!
//! # async fn example() -> stylematch_domain::Result<()> {
//! let config = ClientConfig::new("https://api.stylematch.example")?;
//! let store = Arc::new(MemoryCredentialStore::new());
//! let locale = Arc::new(LocaleProvider::in_memory());
//!
//! let client = StyleMatchClient::new(config, store, locale)?;
//! client.auth().login("stylist", "stylist123").await?;
//! let members = client.members().list(0, 10).await?;
//! # let _ = members;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod sse;

use std::sync::Arc;

use stylematch_common::{CredentialStore, LocaleProvider};
use stylematch_domain::Result;

pub use api::{ApiTransport, AuthApi, ClothingApi, FilePayload, FilesApi, MatchApi, MembersApi};
pub use config::ClientConfig;
pub use http::HttpClient;
pub use sse::{EventStreamClient, StreamOptions};

/// Entry point wiring one transport and handing out resource clients.
pub struct StyleMatchClient {
    transport: Arc<ApiTransport>,
}

impl StyleMatchClient {
    /// Create a client over the given configuration and state backends.
    ///
    /// # Errors
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(
        config: ClientConfig,
        store: Arc<dyn CredentialStore>,
        locale: Arc<LocaleProvider>,
    ) -> Result<Self> {
        let transport = Arc::new(ApiTransport::new(&config, store, locale)?);
        Ok(Self { transport })
    }

    /// The shared transport, for callers composing their own requests.
    pub fn transport(&self) -> Arc<ApiTransport> {
        Arc::clone(&self.transport)
    }

    /// Authentication operations.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.transport())
    }

    /// Member management.
    pub fn members(&self) -> MembersApi {
        MembersApi::new(self.transport())
    }

    /// Clothing inventory management.
    pub fn clothing(&self) -> ClothingApi {
        ClothingApi::new(self.transport())
    }

    /// Match tasks and history.
    pub fn match_tasks(&self) -> MatchApi {
        MatchApi::new(self.transport())
    }

    /// File uploads.
    pub fn files(&self) -> FilesApi {
        FilesApi::new(self.transport())
    }

    /// Event stream client for task progress.
    ///
    /// Built on its own connection pool: SSE bypasses the authorized
    /// transport and carries no overall request deadline.
    ///
    /// # Errors
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn task_events(&self) -> Result<EventStreamClient> {
        EventStreamClient::new(self.transport.base_url(), Arc::clone(self.transport.store()))
    }
}
