//! Typed failures for gateway calls.
//!
//! ERROR HANDLING
//! ==============
//! Views render `ApiError`'s `Display` directly; the auth layer collapses every
//! login failure into a single `AuthError` variant.

use thiserror::Error;

/// Failure of a REST call against the gateway.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),

    /// The gateway answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16 },

    /// A 2xx envelope carried `success: false`.
    #[error("{message}")]
    Rejected { message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Called during server rendering, where browser HTTP is not available.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Status-specific wording shown by the management views.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { status: 401 } => "You must be signed in to do that.".to_owned(),
            Self::Status { status: 403 } => "You do not have permission to do that.".to_owned(),
            Self::Status { status: 404 } => "Not found.".to_owned(),
            other => other.to_string(),
        }
    }
}

/// Failure of the login exchange.
///
/// Bad credentials and an unreachable gateway are deliberately not
/// distinguished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Login failed")]
    AuthenticationFailed,
}
