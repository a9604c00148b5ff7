//! Core ConversationTree struct and shared state

use super::super::types::{Branch, Checkpoint, CheckpointId, DEFAULT_BRANCH};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Everything the tree guards with a single lock.
///
/// Heads, checkpoints and the active branch change together, so readers
/// never see a head whose checkpoint has not been inserted yet.
#[derive(Debug)]
pub(crate) struct TreeState {
    /// All checkpoints by ID
    pub(crate) checkpoints: HashMap<CheckpointId, Checkpoint>,
    /// All branches by name
    pub(crate) branches: HashMap<String, Branch>,
    /// Name of the active branch, always a key of `branches`
    pub(crate) current_branch: String,
    /// Ordinal handed to the next checkpoint
    pub(crate) next_sequence: u64,
}

impl TreeState {
    pub(crate) fn new() -> Self {
        let mut branches = HashMap::new();
        branches.insert(DEFAULT_BRANCH.to_string(), Branch::new(DEFAULT_BRANCH, None));

        Self {
            checkpoints: HashMap::new(),
            branches,
            current_branch: DEFAULT_BRANCH.to_string(),
            next_sequence: 0,
        }
    }
}

/// Thread-safe, in-memory store of checkpoints and branches
///
/// Cloning yields another handle to the same tree.
#[derive(Debug, Clone)]
pub struct ConversationTree {
    pub(crate) state: Arc<RwLock<TreeState>>,
}

impl ConversationTree {
    /// Create a tree holding a single empty `main` branch
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(TreeState::new())),
        }
    }
}

impl Default for ConversationTree {
    fn default() -> Self {
        Self::new()
    }
}
