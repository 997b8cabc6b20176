//! Client configuration
//!
//! Loads SDK configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes a small set of paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `STYLEMATCH_API_BASE_URL`: Backend base URL (required)
//! - `STYLEMATCH_HTTP_TIMEOUT_SECS`: Uniform request deadline in seconds
//! - `STYLEMATCH_USER_AGENT`: Optional User-Agent override

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use stylematch_domain::{Result, StyleMatchError};
use url::Url;

use crate::http::DEFAULT_TIMEOUT;

const CONFIG_FILE_CANDIDATES: [&str; 4] =
    ["stylematch.json", "stylematch.toml", "config.json", "config.toml"];

/// Configuration for the StyleMatch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash (e.g.,
    /// "https://api.stylematch.example").
    pub base_url: String,
    /// Uniform request deadline applied to every API call.
    pub timeout: Duration,
    /// Optional User-Agent header value.
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with the default deadline.
    ///
    /// # Errors
    /// Returns [`StyleMatchError::Config`] when `base_url` is not a valid
    /// absolute URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = validate_base_url(base_url.into())?;
        Ok(Self { base_url, timeout: DEFAULT_TIMEOUT, user_agent: None })
    }

    /// Override the uniform request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a User-Agent header value.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }
}

/// Shape of a configuration file (JSON or TOML).
#[derive(Debug, Deserialize)]
struct FileConfig {
    base_url: String,
    timeout_seconds: Option<u64>,
    user_agent: Option<String>,
}

impl TryFrom<FileConfig> for ClientConfig {
    type Error = StyleMatchError;

    fn try_from(file: FileConfig) -> Result<Self> {
        let mut config = ClientConfig::new(file.base_url)?;
        if let Some(secs) = file.timeout_seconds {
            config.timeout = Duration::from_secs(secs);
        }
        config.user_agent = file.user_agent;
        Ok(config)
    }
}

/// Load configuration with automatic fallback strategy.
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns [`StyleMatchError::Config`] if configuration cannot be loaded
/// from either source.
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables.
///
/// # Errors
/// Returns [`StyleMatchError::Config`] if `STYLEMATCH_API_BASE_URL` is
/// missing or any variable has an invalid value.
pub fn load_from_env() -> Result<ClientConfig> {
    let base_url = std::env::var("STYLEMATCH_API_BASE_URL")
        .map_err(|_| StyleMatchError::Config("STYLEMATCH_API_BASE_URL is not set".into()))?;

    let mut config = ClientConfig::new(base_url)?;

    if let Ok(raw) = std::env::var("STYLEMATCH_HTTP_TIMEOUT_SECS") {
        let secs = raw
            .parse::<u64>()
            .map_err(|e| StyleMatchError::Config(format!("invalid timeout: {e}")))?;
        config.timeout = Duration::from_secs(secs);
    }

    if let Ok(agent) = std::env::var("STYLEMATCH_USER_AGENT") {
        config.user_agent = Some(agent);
    }

    Ok(config)
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes the working directory for
/// `stylematch.{json,toml}` and `config.{json,toml}`.
///
/// # Errors
/// Returns [`StyleMatchError::Config`] if no file is found or the file does
/// not parse.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(StyleMatchError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            StyleMatchError::Config("no config file found in the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| StyleMatchError::Config(format!("failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn probe_config_paths() -> Option<PathBuf> {
    CONFIG_FILE_CANDIDATES.into_iter().map(PathBuf::from).find(|candidate| candidate.exists())
}

fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let is_toml = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let file: FileConfig = if is_toml {
        toml::from_str(contents)
            .map_err(|e| StyleMatchError::Config(format!("invalid TOML config: {e}")))?
    } else {
        serde_json::from_str(contents)
            .map_err(|e| StyleMatchError::Config(format!("invalid JSON config: {e}")))?
    };

    file.try_into()
}

fn validate_base_url(raw: String) -> Result<String> {
    Url::parse(&raw)
        .map_err(|e| StyleMatchError::Config(format!("invalid base URL '{raw}': {e}")))?;
    Ok(raw.trim_end_matches('/').to_string())
}
