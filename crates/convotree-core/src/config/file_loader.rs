//! File-based configuration loading

use super::ConvoConfig;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// `~/.convotree/config.json`, if a home directory is known
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".convotree").join("config.json"))
}

/// Load configuration from a JSON file
///
/// Returns the default config if the file doesn't exist.
pub fn load_from_file(path: &Path) -> Result<ConvoConfig, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(ConvoConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: Arc::new(e),
    })?;

    let config = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: Arc::new(e),
    })?;

    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorKind;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_from_file(&temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(config, ConvoConfig::default());
    }

    #[test]
    fn test_load_partial_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("convotree.json");
        fs::write(
            &config_path,
            r#"{
                "generator": { "kind": "echo", "seed": 9 },
                "logging": { "level": "debug" }
            }"#,
        )
        .unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.generator.kind, GeneratorKind::Echo);
        assert_eq!(config.generator.seed, Some(9));
        assert_eq!(config.generator.max_words, 10);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.json");
        fs::write(&config_path, "{ not json").unwrap();

        let err = load_from_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.error_code(), "CONFIG_PARSE");
    }
}
