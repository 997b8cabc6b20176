//! Thin HTTP layer over reqwest.

mod client;

pub use client::{HttpClient, HttpClientBuilder, DEFAULT_TIMEOUT};
