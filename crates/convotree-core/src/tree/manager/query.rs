//! Read-only accessors

use super::super::types::{Branch, Checkpoint, CheckpointId, Exchange};
use super::core::{ConversationTree, TreeState};
use crate::error::{TreeError, TreeResult};

impl TreeState {
    pub(crate) fn current_head(&self) -> Option<CheckpointId> {
        self.branches
            .get(&self.current_branch)
            .and_then(|b| b.head.clone())
    }

    pub(crate) fn branch(&self, name: &str) -> TreeResult<&Branch> {
        self.branches
            .get(name)
            .ok_or_else(|| TreeError::unknown_branch(name))
    }
}

impl ConversationTree {
    /// Linear history of the active branch, oldest exchange first
    pub async fn get_history(&self) -> TreeResult<Vec<Exchange>> {
        let state = self.state.read().await;
        let head = state.current_head();
        state.walk_history(head.as_ref())
    }

    /// Name of the active branch together with its history, read atomically
    pub async fn current_history(&self) -> TreeResult<(String, Vec<Exchange>)> {
        let state = self.state.read().await;
        let head = state.current_head();
        let history = state.walk_history(head.as_ref())?;
        Ok((state.current_branch.clone(), history))
    }

    /// Linear history of any branch, oldest exchange first
    pub async fn history_of(&self, branch_name: &str) -> TreeResult<Vec<Exchange>> {
        let state = self.state.read().await;
        let head = state.branch(branch_name)?.head.clone();
        state.walk_history(head.as_ref())
    }

    /// Get a branch by name
    pub async fn get_branch(&self, name: &str) -> TreeResult<Branch> {
        self.state.read().await.branch(name).cloned()
    }

    /// Get a checkpoint by ID
    pub async fn get_checkpoint(&self, id: &CheckpointId) -> TreeResult<Checkpoint> {
        self.state
            .read()
            .await
            .checkpoints
            .get(id)
            .cloned()
            .ok_or_else(|| TreeError::unknown_checkpoint(id))
    }

    /// Head of the named branch
    pub async fn head_of(&self, branch_name: &str) -> TreeResult<Option<CheckpointId>> {
        Ok(self.state.read().await.branch(branch_name)?.head.clone())
    }

    /// Head of the active branch
    pub async fn current_head(&self) -> Option<CheckpointId> {
        self.state.read().await.current_head()
    }

    /// Name of the active branch
    pub async fn current_branch_name(&self) -> String {
        self.state.read().await.current_branch.clone()
    }

    /// Branch names, sorted
    pub async fn list_branch_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.state.read().await.branches.keys().cloned().collect();
        names.sort();
        names
    }

    /// Branches sorted by name
    pub async fn list_branches(&self) -> Vec<Branch> {
        let mut branches: Vec<_> = self.state.read().await.branches.values().cloned().collect();
        branches.sort_by(|a, b| a.name.cmp(&b.name));
        branches
    }

    /// Checkpoint IDs in creation order
    pub async fn list_checkpoint_ids(&self) -> Vec<CheckpointId> {
        let state = self.state.read().await;
        let mut checkpoints: Vec<_> = state.checkpoints.values().collect();
        checkpoints.sort_by_key(|c| c.sequence);
        checkpoints.into_iter().map(|c| c.id.clone()).collect()
    }

    /// Get checkpoint count
    pub async fn checkpoint_count(&self) -> usize {
        self.state.read().await.checkpoints.len()
    }

    /// Get branch count
    pub async fn branch_count(&self) -> usize {
        self.state.read().await.branches.len()
    }
}
