//! Conversation tree
//!
//! Records every exchange as an immutable checkpoint linked to its parent,
//! and tracks named branches whose heads point into that history. Branches
//! can be created from any checkpoint and switched between; each one's
//! history is replayed by walking parent links back to a root.

mod history;
mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::ConversationTree;
pub use types::{Branch, Checkpoint, CheckpointId, DEFAULT_BRANCH, Exchange};
