//! Active locale and its persistence
//!
//! The locale feeds the `Accept-Language` header on every API request and
//! must survive restarts, mirroring how the credential unit is handled: a
//! small store trait with in-memory and file backends, fronted by a
//! provider that caches the active value.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use stylematch_domain::{Result, StyleMatchError};
use tracing::{debug, warn};

/// Supported interface locales. The backend resolves anything else to `en`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Zh,
    Ko,
}

impl Locale {
    /// BCP 47 primary subtag sent in `Accept-Language`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
            Self::Ko => "ko",
        }
    }
}

impl FromStr for Locale {
    type Err = StyleMatchError;

    fn from_str(raw: &str) -> Result<Self> {
        // Accept full tags like "ko-KR" by matching the primary subtag.
        let primary = raw.trim().split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            "ko" => Ok(Self::Ko),
            _ => Err(StyleMatchError::InvalidInput(format!("unsupported locale: {raw}"))),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistence interface for the locale preference.
pub trait LocaleStore: Send + Sync {
    /// Load the persisted preference, if any.
    fn load(&self) -> Result<Option<Locale>>;

    /// Persist a new preference.
    fn store(&self, locale: Locale) -> Result<()>;
}

/// In-memory locale store for tests and short-lived tools.
#[derive(Debug, Default)]
pub struct MemoryLocaleStore {
    inner: RwLock<Option<Locale>>,
}

impl MemoryLocaleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocaleStore for MemoryLocaleStore {
    fn load(&self) -> Result<Option<Locale>> {
        Ok(*self.inner.read())
    }

    fn store(&self, locale: Locale) -> Result<()> {
        *self.inner.write() = Some(locale);
        Ok(())
    }
}

/// Locale store persisting the preference as a one-line file.
#[derive(Debug, Clone)]
pub struct FileLocaleStore {
    path: PathBuf,
}

impl FileLocaleStore {
    /// Create a store writing to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LocaleStore for FileLocaleStore {
    fn load(&self) -> Result<Option<Locale>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StyleMatchError::Storage(format!(
                    "failed to read locale preference: {e}"
                )))
            }
        };

        match Locale::from_str(&raw) {
            Ok(locale) => Ok(Some(locale)),
            Err(_) => {
                warn!(path = %self.path.display(), "ignoring unreadable locale preference");
                Ok(None)
            }
        }
    }

    fn store(&self, locale: Locale) -> Result<()> {
        std::fs::write(&self.path, locale.as_str()).map_err(|e| {
            StyleMatchError::Storage(format!("failed to persist locale preference: {e}"))
        })
    }
}

/// Exposes the currently active locale and persists selection changes.
pub struct LocaleProvider {
    store: Arc<dyn LocaleStore>,
    active: RwLock<Locale>,
}

impl LocaleProvider {
    /// Create a provider, restoring any persisted preference.
    ///
    /// # Errors
    /// Returns an error when the store cannot be read.
    pub fn new(store: Arc<dyn LocaleStore>) -> Result<Self> {
        let active = store.load()?.unwrap_or_default();
        debug!(locale = %active, "locale provider initialized");
        Ok(Self { store, active: RwLock::new(active) })
    }

    /// Provider backed by an in-memory store, starting at the default locale.
    pub fn in_memory() -> Self {
        Self { store: Arc::new(MemoryLocaleStore::new()), active: RwLock::new(Locale::default()) }
    }

    /// The currently active locale.
    pub fn active(&self) -> Locale {
        *self.active.read()
    }

    /// Switch the active locale and persist the selection.
    ///
    /// # Errors
    /// Returns an error when persisting fails; the active locale is left
    /// unchanged in that case.
    pub fn set(&self, locale: Locale) -> Result<()> {
        self.store.store(locale)?;
        *self.active.write() = locale;
        debug!(locale = %locale, "active locale changed");
        Ok(())
    }
}
