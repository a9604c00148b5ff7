//! Response generator configuration

use crate::error::ConfigError;
use crate::generator::DEFAULT_MAX_WORDS;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which built-in generator to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    /// Random words from a fixed list
    #[default]
    WordSalad,
    /// Repeat the last user input
    Echo,
}

impl FromStr for GeneratorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "word_salad" => Ok(Self::WordSalad),
            "echo" => Ok(Self::Echo),
            _ => Err(ConfigError::invalid_value("generator", s)),
        }
    }
}

impl std::fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WordSalad => write!(f, "word-salad"),
            Self::Echo => write!(f, "echo"),
        }
    }
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Generator implementation
    pub kind: GeneratorKind,
    /// Upper bound on words per reply (word salad only)
    pub max_words: usize,
    /// Replacement vocabulary (word salad only)
    pub words: Option<Vec<String>>,
    /// Seed for reproducible replies
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            kind: GeneratorKind::default(),
            max_words: DEFAULT_MAX_WORDS,
            words: None,
            seed: None,
        }
    }
}
