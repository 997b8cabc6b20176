//! Backend response wrappers
//!
//! Every JSON response body from the backend is wrapped in a uniform
//! envelope `{ code, message, data }` where `code == 0` means success and
//! `data` is null on error. List endpoints additionally wrap their payload
//! in a 0-indexed page.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, StyleMatchError};

/// Uniform API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Application status code, `0` on success.
    pub code: i32,
    /// Human-readable status message.
    pub message: String,
    /// Payload, absent on application-level errors.
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope, returning the payload.
    ///
    /// # Errors
    /// Returns [`StyleMatchError::Api`] when the envelope carries a non-zero
    /// code, or [`StyleMatchError::Internal`] when a success envelope has no
    /// payload.
    pub fn into_data(self) -> Result<T> {
        if self.code != 0 {
            return Err(StyleMatchError::Api { code: self.code, message: self.message });
        }
        self.data
            .ok_or_else(|| StyleMatchError::Internal("success envelope is missing data".into()))
    }

    /// Check the envelope code for endpoints whose payload is irrelevant.
    ///
    /// # Errors
    /// Returns [`StyleMatchError::Api`] when the envelope carries a non-zero
    /// code.
    pub fn ensure_ok(self) -> Result<()> {
        if self.code != 0 {
            return Err(StyleMatchError::Api { code: self.code, message: self.message });
        }
        Ok(())
    }
}

/// Generic paged response, pages are 0-indexed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total item count across all pages.
    pub total: i64,
    /// Page number, starting from 0.
    pub page: i32,
    /// Requested page size.
    pub size: i32,
}
