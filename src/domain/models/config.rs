use serde::{Deserialize, Serialize};

/// Main configuration structure for cfs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Credential store connection settings
    #[serde(default)]
    pub credhub: CredHubConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Credential store and authorization client settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CredHubConfig {
    /// Store address, either `host:port` (HTTPS implied) or a full URL
    #[serde(default)]
    pub addr: String,

    /// OAuth client id used for the client-credentials grant
    #[serde(default)]
    pub client_id: String,

    /// OAuth client secret used for the client-credentials grant
    #[serde(default)]
    pub client_secret: String,

    /// Total budget per request (connect, TLS and response), in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Accept self-signed certificates from the store and authorization server
    #[serde(default = "default_true")]
    pub skip_tls_validation: bool,

    /// Fetch a fresh token and replay once when the store rejects a cached token
    #[serde(default = "default_true")]
    pub reauth_on_unauthorized: bool,
}

const fn default_timeout_secs() -> u64 {
    5
}

const fn default_true() -> bool {
    true
}

impl Default for CredHubConfig {
    fn default() -> Self {
        Self {
            addr: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            timeout_secs: default_timeout_secs(),
            skip_tls_validation: default_true(),
            reauth_on_unauthorized: default_true(),
        }
    }
}

impl std::fmt::Debug for CredHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredHubConfig")
            .field("addr", &self.addr)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("skip_tls_validation", &self.skip_tls_validation)
            .field("reauth_on_unauthorized", &self.reauth_on_unauthorized)
            .finish()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
