//! Platform keyring credential store
//!
//! Persists the credential unit in the OS credential service (Keychain
//! Access on macOS, Credential Manager on Windows, Secret Service on
//! Linux). The whole unit is serialized into a single keyring entry so
//! writes and deletes stay atomic.

use async_trait::async_trait;
use keyring::Entry;
use stylematch_domain::{Result, StyleMatchError};
use tracing::debug;

use super::store::CredentialStore;
use super::types::Credentials;

/// Credential store backed by the platform keyring.
pub struct KeyringCredentialStore {
    service: String,
    account: String,
}

impl KeyringCredentialStore {
    /// Create a store bound to a keyring service/account pair.
    ///
    /// # Arguments
    /// * `service` - Service identifier (e.g., "StyleMatch.api")
    /// * `account` - Account identifier (e.g., "main")
    pub fn new(service: impl Into<String>, account: impl Into<String>) -> Self {
        Self { service: service.into(), account: account.into() }
    }

    fn entry(service: &str, account: &str) -> Result<Entry> {
        Entry::new(service, account)
            .map_err(|e| StyleMatchError::Storage(format!("failed to open keyring entry: {e}")))
    }

    async fn run_blocking<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&str, &str) -> Result<T> + Send + 'static,
    {
        let service = self.service.clone();
        let account = self.account.clone();
        tokio::task::spawn_blocking(move || op(&service, &account))
            .await
            .map_err(|e| StyleMatchError::Internal(format!("keyring task failed: {e}")))?
    }
}

#[async_trait]
impl CredentialStore for KeyringCredentialStore {
    async fn load(&self) -> Result<Option<Credentials>> {
        self.run_blocking(|service, account| {
            let entry = Self::entry(service, account)?;
            match entry.get_password() {
                Ok(raw) => serde_json::from_str(&raw).map(Some).map_err(|e| {
                    StyleMatchError::Storage(format!("stored credentials are corrupt: {e}"))
                }),
                Err(keyring::Error::NoEntry) => Ok(None),
                Err(e) => Err(StyleMatchError::Storage(format!("keyring read failed: {e}"))),
            }
        })
        .await
    }

    async fn store(&self, credentials: &Credentials) -> Result<()> {
        let serialized = serde_json::to_string(credentials).map_err(|e| {
            StyleMatchError::Storage(format!("failed to serialize credentials: {e}"))
        })?;

        self.run_blocking(move |service, account| {
            let entry = Self::entry(service, account)?;
            entry
                .set_password(&serialized)
                .map_err(|e| StyleMatchError::Storage(format!("keyring write failed: {e}")))
        })
        .await?;

        debug!(service = %self.service, "credential unit stored in keyring");
        Ok(())
    }

    async fn update_access_token(&self, access_token: &str) -> Result<()> {
        let current = self
            .load()
            .await?
            .ok_or_else(|| StyleMatchError::NotFound("no stored credentials to update".into()))?;
        self.store(&current.with_access_token(access_token)).await
    }

    async fn clear(&self) -> Result<()> {
        self.run_blocking(|service, account| {
            let entry = Self::entry(service, account)?;
            match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
                Err(e) => Err(StyleMatchError::Storage(format!("keyring delete failed: {e}"))),
            }
        })
        .await?;

        debug!(service = %self.service, "credential unit cleared from keyring");
        Ok(())
    }
}
