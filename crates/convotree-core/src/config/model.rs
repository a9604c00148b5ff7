//! Top-level configuration

use super::{GeneratorConfig, LoggingConfig, env_loader, file_loader};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration for a conversation session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvoConfig {
    /// Response generator settings
    pub generator: GeneratorConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl ConvoConfig {
    /// Load defaults, then `path` if it exists, then environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = file_loader::load_from_file(path)?;
        env_loader::load_env_overrides(&mut config)?;
        Ok(config)
    }
}
