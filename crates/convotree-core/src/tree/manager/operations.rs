//! Append, branch creation and switching

use super::super::types::{Branch, Checkpoint, CheckpointId, Exchange};
use super::core::{ConversationTree, TreeState};
use crate::error::{TreeError, TreeResult};
use chrono::Utc;
use tracing::{debug, info, warn};

impl TreeState {
    pub(crate) fn append(&mut self, exchange: Exchange) -> CheckpointId {
        let current = self.current_branch.clone();
        match self.append_to(&current, exchange) {
            Ok(id) => id,
            // switch_branch only accepts existing names and branches are never removed
            Err(_) => panic!("active branch '{current}' is missing"),
        }
    }

    pub(crate) fn append_to(
        &mut self,
        branch_name: &str,
        exchange: Exchange,
    ) -> TreeResult<CheckpointId> {
        let Some(branch) = self.branches.get_mut(branch_name) else {
            return Err(TreeError::unknown_branch(branch_name));
        };

        let id = CheckpointId::new();
        let parent_id = branch.head.replace(id.clone());
        let checkpoint = Checkpoint {
            id: id.clone(),
            exchange,
            parent_id: parent_id.clone(),
            sequence: self.next_sequence,
            created_at: Utc::now(),
        };
        self.next_sequence += 1;
        self.checkpoints.insert(id.clone(), checkpoint);

        debug!(
            checkpoint = %id,
            parent = ?parent_id.as_ref().map(CheckpointId::as_str),
            branch = %branch_name,
            "appended exchange"
        );
        Ok(id)
    }

    pub(crate) fn insert_branch(
        &mut self,
        name: &str,
        head: Option<CheckpointId>,
    ) -> TreeResult<()> {
        if self.branches.contains_key(name) {
            warn!(branch = %name, "rejected duplicate branch");
            return Err(TreeError::duplicate_branch(name));
        }
        if let Some(id) = &head {
            if !self.checkpoints.contains_key(id) {
                warn!(branch = %name, checkpoint = %id, "rejected branch from unknown checkpoint");
                return Err(TreeError::unknown_checkpoint(id));
            }
        }

        info!(
            branch = %name,
            head = ?head.as_ref().map(CheckpointId::as_str),
            "created branch"
        );
        self.branches.insert(name.to_string(), Branch::new(name, head));
        Ok(())
    }
}

impl ConversationTree {
    /// Record an exchange on the active branch and advance its head
    ///
    /// The new checkpoint's parent is the branch's head at the moment the
    /// write lock is taken, so concurrent appends form one chain.
    pub async fn append_exchange(
        &self,
        user_input: impl Into<String>,
        ai_response: impl Into<String>,
    ) -> CheckpointId {
        let exchange = Exchange::new(user_input, ai_response);
        self.state.write().await.append(exchange)
    }

    /// Record an exchange on the named branch, whichever branch is active
    pub async fn append_to_branch(
        &self,
        branch_name: &str,
        user_input: impl Into<String>,
        ai_response: impl Into<String>,
    ) -> TreeResult<CheckpointId> {
        let exchange = Exchange::new(user_input, ai_response);
        self.state.write().await.append_to(branch_name, exchange)
    }

    /// Create a branch pointing at an existing checkpoint
    ///
    /// Does not change the active branch.
    pub async fn create_branch(
        &self,
        new_name: impl AsRef<str>,
        source: &CheckpointId,
    ) -> TreeResult<()> {
        let mut state = self.state.write().await;
        state.insert_branch(new_name.as_ref(), Some(source.clone()))
    }

    /// Create a branch at the active branch's current head
    ///
    /// Returns the head the new branch starts from, `None` when the active
    /// branch has no history yet.
    pub async fn fork_current(&self, new_name: impl AsRef<str>) -> TreeResult<Option<CheckpointId>> {
        let mut state = self.state.write().await;
        let head = state.current_head();
        state.insert_branch(new_name.as_ref(), head.clone())?;
        Ok(head)
    }

    /// Make `name` the active branch
    pub async fn switch_branch(&self, name: impl AsRef<str>) -> TreeResult<()> {
        let name = name.as_ref();
        let mut state = self.state.write().await;
        if !state.branches.contains_key(name) {
            warn!(branch = %name, "rejected switch to unknown branch");
            return Err(TreeError::unknown_branch(name));
        }

        info!(from = %state.current_branch, to = %name, "switched branch");
        state.current_branch = name.to_string();
        Ok(())
    }
}
