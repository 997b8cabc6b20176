//! Credential storage
//!
//! The access token, refresh token, and display name form one credential
//! unit: they are written together and cleared together, so a crash can
//! never leave a refresh token behind without its access token (or the
//! other way around).

mod store;
mod types;

#[cfg(feature = "keyring")]
mod keyring;

pub use store::{CredentialStore, MemoryCredentialStore};
pub use types::Credentials;

#[cfg(feature = "keyring")]
pub use self::keyring::KeyringCredentialStore;
