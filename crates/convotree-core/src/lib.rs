//! Convotree Core Library
//!
//! A branching, checkpointed history of conversational exchanges, shaped
//! like a version-control commit graph:
//! - every exchange becomes an immutable checkpoint linked to its parent
//! - named branches point at checkpoints and advance as the conversation grows
//! - any checkpoint can seed a new branch, and branches can be switched freely
//!
//! Replies come from a pluggable [`ResponseGenerator`]; the [`Conversation`]
//! driver wires the two together.

pub mod config;
pub mod conversation;
pub mod error;
pub mod generator;
pub mod tree;

// Re-export commonly used types
pub use config::{ConvoConfig, GeneratorConfig, GeneratorKind, LoggingConfig};
pub use conversation::{Conversation, Turn};
pub use error::{ConfigError, ConvoError, ConvoResult, GeneratorError, TreeError, TreeResult};
pub use generator::{EchoGenerator, ResponseGenerator, WordSaladGenerator, build_generator};
pub use tree::{Branch, Checkpoint, CheckpointId, ConversationTree, DEFAULT_BRANCH, Exchange};
