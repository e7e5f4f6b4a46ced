//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::TfeConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file, an optional explicit file and
    /// the environment.
    pub fn load(config_file: Option<&Path>) -> Result<TfeConfig, ApiError> {
        Ok(MergeService::load(config_file)?)
    }

    /// Load configuration from a specific file only, with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<TfeConfig, ApiError> {
        Ok(MergeService::load_from_file(path)?)
    }

    /// Create default configuration.
    pub fn default() -> TfeConfig {
        TfeConfig::default()
    }
}
