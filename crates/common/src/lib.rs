//! # StyleMatch Common
//!
//! Client-side persisted state shared by the transport and resource clients:
//!
//! - [`auth`]: the credential unit (access token, refresh token, display
//!   name) and the narrow [`auth::CredentialStore`] interface with in-memory
//!   and platform-keyring backends
//! - [`locale`]: the active locale and its persistence
//!
//! ## Architecture
//! - Depends only on `stylematch-domain`
//! - Credential and locale state are swappable behind small traits so tests
//!   run against in-memory backends

pub mod auth;
pub mod locale;

pub use auth::{CredentialStore, Credentials, MemoryCredentialStore};
#[cfg(feature = "keyring")]
pub use auth::KeyringCredentialStore;
pub use locale::{FileLocaleStore, Locale, LocaleProvider, LocaleStore, MemoryLocaleStore};
