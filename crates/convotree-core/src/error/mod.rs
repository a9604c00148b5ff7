//! Error types for the conversation tree
//!
//! Every error exposes an `error_code()` for programmatic handling:
//! - `TreeError`: branch and checkpoint lookups, plus internal invariant violations
//! - `GeneratorError`: failures reported by a response generator
//! - `ConfigError`: configuration file and environment problems
//! - `ConvoError`: crate-level wrapper over all of the above

mod types;

pub use types::{
    ConfigError, ConvoError, ConvoResult, GeneratorError, GeneratorResult, TreeError, TreeResult,
};
