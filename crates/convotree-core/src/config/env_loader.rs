//! Environment variable overrides
//!
//! Recognised variables:
//! - `CONVOTREE_GENERATOR`: `word-salad` or `echo`
//! - `CONVOTREE_SEED`: unsigned integer seed
//! - `CONVOTREE_MAX_WORDS`: positive integer
//! - `CONVOTREE_LOG_LEVEL`: log level or filter directive

use super::{ConvoConfig, LoggingConfig};
use crate::error::ConfigError;
use std::env;

pub const ENV_GENERATOR: &str = "CONVOTREE_GENERATOR";
pub const ENV_SEED: &str = "CONVOTREE_SEED";
pub const ENV_MAX_WORDS: &str = "CONVOTREE_MAX_WORDS";
pub const ENV_LOG_LEVEL: &str = "CONVOTREE_LOG_LEVEL";

/// Apply overrides from the process environment
pub fn load_env_overrides(config: &mut ConvoConfig) -> Result<(), ConfigError> {
    apply_env_overrides(config, |key| env::var(key).ok())
}

/// Apply overrides read through `lookup`
pub fn apply_env_overrides<F>(config: &mut ConvoConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(kind) = lookup(ENV_GENERATOR) {
        config.generator.kind = kind
            .parse()
            .map_err(|_| ConfigError::invalid_value(ENV_GENERATOR, &kind))?;
    }

    if let Some(seed) = lookup(ENV_SEED) {
        let seed = seed
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid_value(ENV_SEED, &seed))?;
        config.generator.seed = Some(seed);
    }

    if let Some(max_words) = lookup(ENV_MAX_WORDS) {
        config.generator.max_words = match max_words.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => return Err(ConfigError::invalid_value(ENV_MAX_WORDS, max_words)),
        };
    }

    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        config.logging.merge(LoggingConfig { level });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorKind;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_no_variables_keeps_config() {
        let mut config = ConvoConfig::default();
        apply_env_overrides(&mut config, lookup_from(&[])).unwrap();
        assert_eq!(config, ConvoConfig::default());
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = ConvoConfig::default();
        apply_env_overrides(
            &mut config,
            lookup_from(&[
                (ENV_GENERATOR, "echo"),
                (ENV_SEED, "123"),
                (ENV_MAX_WORDS, "4"),
                (ENV_LOG_LEVEL, "convotree_core=debug"),
            ]),
        )
        .unwrap();

        assert_eq!(config.generator.kind, GeneratorKind::Echo);
        assert_eq!(config.generator.seed, Some(123));
        assert_eq!(config.generator.max_words, 4);
        assert_eq!(config.logging.level, "convotree_core=debug");
    }

    #[test]
    fn test_invalid_values_rejected() {
        for (key, value) in [
            (ENV_SEED, "-1"),
            (ENV_MAX_WORDS, "0"),
            (ENV_MAX_WORDS, "many"),
            (ENV_GENERATOR, "oracle"),
        ] {
            let mut config = ConvoConfig::default();
            let err = apply_env_overrides(&mut config, lookup_from(&[(key, value)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }), "{key}={value}");
        }
    }

    #[test]
    fn test_bad_generator_reported_under_env_name() {
        let mut config = ConvoConfig::default();
        let err = apply_env_overrides(&mut config, lookup_from(&[(ENV_GENERATOR, "oracle")]))
            .unwrap_err();

        match err {
            ConfigError::InvalidValue { key, value } => {
                assert_eq!(key, ENV_GENERATOR);
                assert_eq!(value, "oracle");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(config.generator.kind, GeneratorKind::default());
    }
}
