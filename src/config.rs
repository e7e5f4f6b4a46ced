//! Configuration
//!
//! Client settings resolved from defaults, config files and `TFE_*`
//! environment variables. See [`ConfigLoader`] for precedence.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ADDRESS: &str = "https://app.terraform.io";
pub const DEFAULT_BASE_PATH: &str = "/api/v2/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const REDACTED: &str = "********";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfeConfig {
    /// Service address, scheme included.
    #[serde(default = "default_address")]
    pub address: String,

    /// API path appended to the address.
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// API token; usually supplied through `TFE_TOKEN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Connect and request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for TfeConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            base_path: default_base_path(),
            token: None,
            timeout_secs: default_timeout_secs(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TfeConfig {
    /// Copy safe to print: the token is masked.
    pub fn redacted(&self) -> TfeConfig {
        let mut config = self.clone();
        if config.token.is_some() {
            config.token = Some(REDACTED.to_string());
        }
        config
    }

    /// Apply command-line overrides on top of loaded values.
    pub fn with_overrides(mut self, address: Option<String>, token: Option<String>) -> Self {
        if let Some(address) = address.filter(|a| !a.is_empty()) {
            self.address = address;
        }
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.token = Some(token);
        }
        self
    }
}
