//! Credential unit types

use serde::{Deserialize, Serialize};

/// The persisted credential unit.
///
/// Created on successful login, access token rewritten on refresh,
/// destroyed on logout or irrecoverable refresh failure. Always stored and
/// cleared as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Bearer token attached to API requests.
    pub access_token: String,
    /// Token presented to the refresh endpoint.
    pub refresh_token: String,
    /// Display name of the signed-in operator.
    pub display_name: String,
}

impl Credentials {
    /// Create a new credential unit.
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            display_name: display_name.into(),
        }
    }

    /// Copy of this unit with a replaced access token.
    pub fn with_access_token(&self, access_token: impl Into<String>) -> Self {
        Self { access_token: access_token.into(), ..self.clone() }
    }

    /// Whether a refresh token is available.
    pub fn has_refresh_token(&self) -> bool {
        !self.refresh_token.is_empty()
    }
}
