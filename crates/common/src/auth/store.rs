//! The credential store interface and in-memory backend

use async_trait::async_trait;
use parking_lot::RwLock;
use stylematch_domain::{Result, StyleMatchError};
use tracing::debug;

use super::types::Credentials;

/// Narrow persistence interface for the credential unit.
///
/// Consumed by the transport's refresh protocol, the auth client, and the
/// event stream client. Backends must treat the unit atomically: `store`
/// replaces everything, `clear` removes everything.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Load the stored credential unit, if any.
    async fn load(&self) -> Result<Option<Credentials>>;

    /// Replace the stored credential unit.
    async fn store(&self, credentials: &Credentials) -> Result<()>;

    /// Rewrite the unit with a new access token, keeping the rest.
    ///
    /// # Errors
    /// Returns [`StyleMatchError::NotFound`] when no unit is stored.
    async fn update_access_token(&self, access_token: &str) -> Result<()>;

    /// Remove the stored credential unit. Idempotent.
    async fn clear(&self) -> Result<()>;
}

/// In-memory credential store.
///
/// Default backend for tests and short-lived tools; each instance is
/// independent.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: RwLock<Option<Credentials>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a credential unit.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self { inner: RwLock::new(Some(credentials)) }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> Result<Option<Credentials>> {
        Ok(self.inner.read().clone())
    }

    async fn store(&self, credentials: &Credentials) -> Result<()> {
        *self.inner.write() = Some(credentials.clone());
        debug!("credential unit stored");
        Ok(())
    }

    async fn update_access_token(&self, access_token: &str) -> Result<()> {
        let mut guard = self.inner.write();
        match guard.as_ref() {
            Some(current) => {
                *guard = Some(current.with_access_token(access_token));
                Ok(())
            }
            None => Err(StyleMatchError::NotFound("no stored credentials to update".into())),
        }
    }

    async fn clear(&self) -> Result<()> {
        *self.inner.write() = None;
        debug!("credential unit cleared");
        Ok(())
    }
}
