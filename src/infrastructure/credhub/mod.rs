//! CredHub HTTP client
//!
//! Discovers the authorization server from the store, exchanges client
//! credentials for a bearer token, caches both for the life of the client and
//! translates store responses into [`StoreError`](crate::domain::StoreError).

pub mod client;
pub mod token_cache;
pub mod types;

pub use client::{normalize_base_url, CredHubClient, CredHubClientConfig};
pub use token_cache::{AuthToken, TokenCache};
