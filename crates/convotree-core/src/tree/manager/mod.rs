//! Conversation tree manager

mod core;
mod operations;
mod query;

pub use self::core::ConversationTree;
pub(crate) use self::core::TreeState;
