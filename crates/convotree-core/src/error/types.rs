//! Core error enums

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type alias for tree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Result type alias for response generation
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Result type alias for crate-level operations
pub type ConvoResult<T> = Result<T, ConvoError>;

/// Errors raised by the conversation tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A branch with this name already exists
    #[error("branch '{name}' already exists")]
    DuplicateBranch { name: String },

    /// No branch with this name exists
    #[error("branch '{name}' does not exist")]
    UnknownBranch { name: String },

    /// No checkpoint with this id exists
    #[error("checkpoint '{id}' does not exist")]
    UnknownCheckpoint { id: String },

    /// Internal state is inconsistent (dangling parent, cyclic chain).
    /// Never caused by caller input.
    #[error("conversation tree invariant violated: {message}")]
    InvariantViolation { message: String },
}

impl TreeError {
    pub fn duplicate_branch(name: impl Into<String>) -> Self {
        Self::DuplicateBranch { name: name.into() }
    }

    pub fn unknown_branch(name: impl Into<String>) -> Self {
        Self::UnknownBranch { name: name.into() }
    }

    pub fn unknown_checkpoint(id: impl ToString) -> Self {
        Self::UnknownCheckpoint { id: id.to_string() }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateBranch { .. } => "TREE_DUPLICATE_BRANCH",
            Self::UnknownBranch { .. } => "TREE_UNKNOWN_BRANCH",
            Self::UnknownCheckpoint { .. } => "TREE_UNKNOWN_CHECKPOINT",
            Self::InvariantViolation { .. } => "TREE_INVARIANT_VIOLATION",
        }
    }

    /// Whether the error was caused by caller input and can simply be reported
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::InvariantViolation { .. })
    }
}

/// Errors reported by a response generator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("{generator} failed to produce a response: {message}")]
    Failed { generator: String, message: String },

    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
}

impl GeneratorError {
    pub fn failed(generator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            generator: generator.into(),
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Failed { .. } => "GENERATOR_FAILED",
            Self::InvalidConfig(_) => "GENERATOR_INVALID_CONFIG",
        }
    }
}

/// Configuration loading errors
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: Arc<std::io::Error>,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: Arc<serde_json::Error>,
    },

    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

impl ConfigError {
    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "CONFIG_READ",
            Self::Parse { .. } => "CONFIG_PARSE",
            Self::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
        }
    }
}

/// Top-level error wrapping the domain-specific errors
#[derive(Error, Debug, Clone)]
pub enum ConvoError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ConvoError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Tree(e) => e.error_code(),
            Self::Generator(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
