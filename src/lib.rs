//! credhub-fs - filesystem-style access to a CredHub credential store
//!
//! `cfs` lets you browse and manage credentials in a flat, name-keyed store as if
//! their `/`-delimited names were files in a directory tree.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): credential models, store errors and the
//!   [`CredentialStore`] port
//! - **Service Layer** (`services`): path projection and listing rendering
//! - **Infrastructure Layer** (`infrastructure`): CredHub HTTP client,
//!   configuration and logging
//! - **CLI Layer** (`cli`): `cat`, `ls`, `rm` and `set`
//!
//! # Example
//!
//! ```ignore
//! use credhub_fs::{CredHubClient, CredHubClientConfig, CredentialStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = CredHubClient::new(CredHubClientConfig {
//!         base_url: "credhub.example.com:8844".into(),
//!         client_id: "cfs".into(),
//!         client_secret: "secret".into(),
//!         ..Default::default()
//!     })?;
//!     let credential = client.get_by_name("/team/db/password").await?;
//!     println!("{}", credential.value);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{Config, CredHubConfig, Credential, CredentialSummary, LoggingConfig};
pub use domain::ports::CredentialStore;
pub use domain::{StoreError, StoreResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::credhub::{CredHubClient, CredHubClientConfig};
pub use infrastructure::logging::LoggerImpl;
pub use services::{project, PathEntry};
