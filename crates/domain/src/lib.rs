//! # StyleMatch Domain
//!
//! Pure wire and domain types shared across the StyleMatch client SDK.
//!
//! This crate contains:
//! - The backend response envelope and paging wrappers
//! - Resource DTOs (members, clothing, match tasks, history, uploads)
//! - The style-tag lookup table used by member and clothing records
//! - The shared [`StyleMatchError`] type
//!
//! ## Architecture
//! - No I/O and no async code - everything here is plain data
//! - Field names follow the backend's camelCase JSON via serde renames

pub mod errors;
pub mod types;

pub use errors::{Result, StyleMatchError};
pub use types::*;
