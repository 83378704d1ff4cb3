pub mod config;
pub mod credential;

pub use config::{Config, CredHubConfig, LoggingConfig};
pub use credential::{Credential, CredentialSummary, VALUE_TYPE};
