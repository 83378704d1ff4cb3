use std::fmt;
use std::future::Future;

use tokio::sync::{OnceCell, RwLock};

use crate::domain::errors::StoreResult;

/// Bearer token issued by the authorization server.
///
/// The store does not tell us when it expires; it is used until a request is
/// rejected.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for the `Authorization` header only.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken([REDACTED])")
    }
}

/// Per-client cache of the discovered authorization-server URL and the current
/// bearer token.
///
/// The URL is written at most once. The token is written once per successful
/// exchange; concurrent writers race and the first one wins.
#[derive(Debug, Default)]
pub struct TokenCache {
    auth_server_url: OnceCell<String>,
    token: RwLock<Option<AuthToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached authorization-server URL, running `discover` if there
    /// is none yet. A failed discovery leaves the cache empty.
    pub async fn auth_server_url<F, Fut>(&self, discover: F) -> StoreResult<&str>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = StoreResult<String>>,
    {
        self.auth_server_url
            .get_or_try_init(discover)
            .await
            .map(String::as_str)
    }

    /// The authorization-server URL if discovery already happened.
    pub fn discovered_auth_server_url(&self) -> Option<&str> {
        self.auth_server_url.get().map(String::as_str)
    }

    pub async fn token(&self) -> Option<AuthToken> {
        self.token.read().await.clone()
    }

    /// Cache `token` unless another caller got there first; returns whichever
    /// token is cached afterwards.
    pub async fn store(&self, token: AuthToken) -> AuthToken {
        let mut cached = self.token.write().await;
        match cached.as_ref() {
            Some(existing) => existing.clone(),
            None => {
                *cached = Some(token.clone());
                token
            }
        }
    }

    /// Drop the cached token if it is still `stale`.
    pub async fn invalidate(&self, stale: &AuthToken) {
        let mut cached = self.token.write().await;
        if cached.as_ref() == Some(stale) {
            *cached = None;
        }
    }
}
