//! Typed API surface of the StyleMatch backend.
//!
//! [`transport::ApiTransport`] owns the authenticated request path and the
//! 401 refresh protocol; the resource clients in the sibling modules are
//! thin typed wrappers over it, one per backend resource family.

pub mod auth;
pub mod clothing;
pub mod files;
pub mod match_tasks;
pub mod members;
pub mod transport;

pub use auth::AuthApi;
pub use clothing::ClothingApi;
pub use files::{FilePayload, FilesApi};
pub use match_tasks::MatchApi;
pub use members::MembersApi;
pub use transport::ApiTransport;
