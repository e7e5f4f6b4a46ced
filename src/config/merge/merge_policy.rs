//! Built-in defaults seeded into every config builder.

use crate::config::{DEFAULT_ADDRESS, DEFAULT_BASE_PATH, DEFAULT_TIMEOUT_SECS};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub(crate) fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("address", DEFAULT_ADDRESS)?
        .set_default("base_path", DEFAULT_BASE_PATH)?
        .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)
}
