//! Server-sent-events client for match task progress.

mod client;
mod parser;

pub use client::{EventStreamClient, StreamOptions};
