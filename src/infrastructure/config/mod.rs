//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - Project YAML file and an optional explicit file
//! - `CREDHUB_ADDR` / `CLIENT_ID` / `CLIENT_SECRET` for compatibility
//! - `CFS_*` environment overrides
//! - Configuration validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, PROJECT_CONFIG_PATH};
