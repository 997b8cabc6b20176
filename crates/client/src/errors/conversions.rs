//! Conversions from external transport errors into domain errors.

use reqwest::Error as HttpError;
use stylematch_domain::StyleMatchError;

/// Error newtype that keeps conversions on the client side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct TransportError(pub StyleMatchError);

impl From<TransportError> for StyleMatchError {
    fn from(value: TransportError) -> Self {
        value.0
    }
}

impl From<StyleMatchError> for TransportError {
    fn from(value: StyleMatchError) -> Self {
        TransportError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → StyleMatchError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for TransportError {
    fn from(err: HttpError) -> Self {
        if err.is_timeout() {
            return TransportError(StyleMatchError::Network("HTTP request timed out".into()));
        }

        if err.is_connect() {
            return TransportError(StyleMatchError::Network("HTTP connection failure".into()));
        }

        if let Some(status) = err.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            let mapped = match code {
                401 | 403 => StyleMatchError::Auth(message),
                404 => StyleMatchError::NotFound(message),
                400..=499 => StyleMatchError::InvalidInput(message),
                _ => StyleMatchError::Network(message),
            };
            return TransportError(mapped);
        }

        TransportError(StyleMatchError::Network(err.to_string()))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
