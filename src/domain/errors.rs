//! Errors surfaced by credential store operations.

use reqwest::StatusCode;
use thiserror::Error;

/// Every way a credential store call can fail.
///
/// The set is closed so that command handlers can match exhaustively instead of
/// probing error types at runtime. The client never retries on its own except for
/// the single re-authentication described on [`StoreError::Unauthorized`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// No credential exists with the requested name
    #[error("could not find credential {name}")]
    NotFound { name: String },

    /// The store returned more than one credential for an exact-name query
    #[error("expected 1 credential named {name} but got {count}")]
    Ambiguous { name: String, count: usize },

    /// Authentication was rejected, either by the authorization server or by the store
    ///
    /// A stale token and a wrong client secret look the same from here. When the
    /// store rejects a cached token the client re-authenticates once before
    /// reporting this.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The authorization server refused the client-credentials grant for a reason
    /// other than bad credentials
    #[error("failed to get token: got {status}: {body}")]
    TokenExchangeFailed { status: StatusCode, body: String },

    /// Network failure, TLS failure or timeout
    #[error("failed to make request: {0}")]
    Transport(#[from] reqwest::Error),

    /// Unexpected HTTP status from the store or discovery endpoint
    #[error("got {status}")]
    ServerError { status: StatusCode, body: String },

    /// A response body could not be understood
    #[error("failed to parse response body: {reason}")]
    MalformedResponse { reason: String },

    /// A credential name was empty
    #[error("credential name must not be empty")]
    InvalidName,

    /// A credential value was empty
    #[error("credential value must not be empty")]
    InvalidValue,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// True for [`StoreError::NotFound`].
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True when authentication could not be established or was rejected.
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized(_) | Self::TokenExchangeFailed { .. })
    }

    /// True when the underlying transport gave up because of the request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }

    pub(crate) fn malformed(reason: impl std::fmt::Display) -> Self {
        Self::MalformedResponse {
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err)
    }
}
