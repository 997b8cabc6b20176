//! Error types used throughout the client SDK

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for StyleMatch client operations
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum StyleMatchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    /// Envelope-level application error (non-zero `code` in the response
    /// envelope, regardless of HTTP status).
    #[error("API error {code}: {message}")]
    Api { code: i32, message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for StyleMatch operations
pub type Result<T> = std::result::Result<T, StyleMatchError>;
