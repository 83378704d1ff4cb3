//! Infrastructure layer module
//!
//! - CredHub HTTP client (implements the `CredentialStore` port)
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod credhub;
pub mod logging;
