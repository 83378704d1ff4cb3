//! Port trait definitions (Hexagonal Architecture)
//!
//! - CredentialStore: name-keyed credential store operations
//!
//! Command handlers depend only on these traits, so the HTTP client in
//! `infrastructure::credhub` can be swapped for an in-memory fake in tests.

pub mod credential_store;

pub use credential_store::CredentialStore;
