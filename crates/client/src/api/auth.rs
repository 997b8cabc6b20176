//! Authentication client
//!
//! Login persists the credential unit (tokens + display name) so the
//! transport can authorize subsequent requests; logout clears it.

use std::sync::Arc;

use stylematch_common::Credentials;
use stylematch_domain::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, Result};
use tracing::{info, instrument};

use super::transport::ApiTransport;

/// Client for `/api/auth`.
pub struct AuthApi {
    transport: Arc<ApiTransport>,
}

impl AuthApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Log in and persist the issued credential unit.
    ///
    /// The username doubles as the stored display name.
    ///
    /// # Errors
    /// Returns the backend failure unchanged; nothing is stored on failure.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest { username: username.to_string(), password: password.to_string() };
        let tokens: LoginResponse = self.transport.post_json("/api/auth/login", &body).await?;

        let credentials =
            Credentials::new(&tokens.access_token, &tokens.refresh_token, username);
        self.transport.store().store(&credentials).await?;

        info!("login succeeded");
        Ok(tokens)
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// Callers normally never need this: the transport refreshes
    /// transparently on 401. The stored credential unit is not touched.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse> {
        let body = RefreshRequest { refresh_token: refresh_token.to_string() };
        self.transport.post_json("/api/auth/refresh", &body).await
    }

    /// Whether a credential unit is currently stored.
    pub async fn is_logged_in(&self) -> Result<bool> {
        Ok(self.transport.store().load().await?.is_some())
    }

    /// Display name of the signed-in operator, if any.
    pub async fn display_name(&self) -> Result<Option<String>> {
        Ok(self.transport.store().load().await?.map(|credentials| credentials.display_name))
    }

    /// Drop the stored credential unit.
    ///
    /// Purely local; the backend keeps no session state beyond the tokens.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        self.transport.store().clear().await?;
        info!("logged out");
        Ok(())
    }
}
