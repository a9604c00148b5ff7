//! History reconstruction

use super::manager::TreeState;
use super::types::{CheckpointId, Exchange};
use crate::error::{TreeError, TreeResult};
use tracing::error;

impl TreeState {
    /// Follow parent links from `head` back to a root.
    ///
    /// A chain can never be longer than the number of checkpoints; a longer
    /// walk means a cycle. Both cycles and dangling parents are reported as
    /// invariant violations rather than looped over or skipped.
    pub(crate) fn walk_history(&self, head: Option<&CheckpointId>) -> TreeResult<Vec<Exchange>> {
        let mut history = Vec::new();
        let mut current = head;

        while let Some(id) = current {
            let Some(checkpoint) = self.checkpoints.get(id) else {
                error!(checkpoint = %id, "dangling checkpoint reference");
                return Err(TreeError::invariant(format!(
                    "checkpoint '{id}' is referenced but not stored"
                )));
            };

            if history.len() == self.checkpoints.len() {
                error!(checkpoint = %id, "parent chain longer than checkpoint store");
                return Err(TreeError::invariant(format!(
                    "parent chain through '{id}' does not terminate"
                )));
            }

            history.push(checkpoint.exchange.clone());
            current = checkpoint.parent_id.as_ref();
        }

        history.reverse();
        Ok(history)
    }
}
