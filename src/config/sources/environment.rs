//! Environment variable source: TFE_* prefix with __ separator for nested keys

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
///
/// `TFE_ADDRESS` and `TFE_TOKEN` map to top-level keys; nested keys use `__`
/// (`TFE_LOGGING__LEVEL`). Values stay strings; numeric fields are parsed
/// when deserializing, so tokens such as `007` keep their leading zeros.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("TFE")
            .prefix_separator("_")
            .separator("__"),
    );
    Ok(builder)
}
