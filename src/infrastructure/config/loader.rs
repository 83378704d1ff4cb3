use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Project-local configuration file, relative to the working directory
pub const PROJECT_CONFIG_PATH: &str = ".cfs/config.yaml";

/// Unprefixed environment variables accepted alongside `CFS_*`,
/// and the config keys they populate
const LEGACY_ENV: [(&str, &str); 3] = [
    ("CREDHUB_ADDR", "credhub.addr"),
    ("CLIENT_ID", "credhub.client_id"),
    ("CLIENT_SECRET", "credhub.client_secret"),
];

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("CredHub address is not set (CREDHUB_ADDR or credhub.addr)")]
    MissingAddress,

    #[error("Client id is not set (CLIENT_ID or credhub.client_id)")]
    MissingClientId,

    #[error("Client secret is not set (CLIENT_SECRET or credhub.client_secret)")]
    MissingClientSecret,

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .cfs/config.yaml (project config, optional)
    /// 3. `explicit_file` (from `--config`, optional)
    /// 4. CREDHUB_ADDR, CLIENT_ID, CLIENT_SECRET
    /// 5. CFS_* environment variables, `__` separating nested keys
    pub fn load(explicit_file: Option<&Path>) -> Result<Config> {
        let config: Config = Self::figment(explicit_file)
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// The merged provider stack, before extraction
    pub fn figment(explicit_file: Option<&Path>) -> Figment {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(PROJECT_CONFIG_PATH));

        if let Some(path) = explicit_file {
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(legacy_env())
            .merge(Env::prefixed("CFS_").split("__"))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let credhub = &config.credhub;

        if credhub.addr.trim().is_empty() {
            return Err(ConfigError::MissingAddress);
        }
        if credhub.client_id.is_empty() {
            return Err(ConfigError::MissingClientId);
        }
        if credhub.client_secret.is_empty() {
            return Err(ConfigError::MissingClientSecret);
        }
        if credhub.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(credhub.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}

fn legacy_env() -> Env {
    Env::raw()
        .only(&LEGACY_ENV.map(|(var, _)| var))
        .map(|var| {
            LEGACY_ENV
                .iter()
                .find(|(name, _)| var.as_str().eq_ignore_ascii_case(name))
                .map_or_else(|| var.as_str().to_owned().into(), |(_, key)| (*key).into())
        })
}
