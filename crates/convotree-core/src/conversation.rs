//! Conversation driver
//!
//! Couples a [`ConversationTree`] with a [`ResponseGenerator`]: the active
//! branch's history is handed to the generator, and the exchange is only
//! recorded once a reply has been produced.

use crate::error::ConvoResult;
use crate::generator::ResponseGenerator;
use crate::tree::{CheckpointId, ConversationTree, Exchange};
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of one successful user turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Checkpoint recording the exchange
    pub checkpoint_id: CheckpointId,
    /// Branch the exchange was appended to
    pub branch: String,
    /// The recorded exchange
    pub exchange: Exchange,
}

/// A conversation tree driven by a response generator
#[derive(Clone)]
pub struct Conversation {
    tree: ConversationTree,
    generator: Arc<dyn ResponseGenerator>,
}

impl Conversation {
    pub fn new(tree: ConversationTree, generator: Arc<dyn ResponseGenerator>) -> Self {
        Self { tree, generator }
    }

    /// The underlying tree
    pub fn tree(&self) -> &ConversationTree {
        &self.tree
    }

    /// Name of the generator in use
    pub fn generator_name(&self) -> &'static str {
        self.generator.name()
    }

    /// Ask the generator for a reply to `user_input` and record the exchange
    ///
    /// The exchange lands on the branch whose history the generator saw,
    /// even if the active branch changes meanwhile. On generator failure the
    /// tree is left untouched.
    pub async fn send(&self, user_input: impl Into<String>) -> ConvoResult<Turn> {
        let user_input = user_input.into();
        let (branch, history) = self.tree.current_history().await?;

        debug!(
            generator = self.generator.name(),
            branch = %branch,
            history_len = history.len(),
            "requesting response"
        );
        let ai_response = match self.generator.generate(&history).await {
            Ok(response) => response,
            Err(e) => {
                warn!(generator = self.generator.name(), error = %e, "response generation failed");
                return Err(e.into());
            }
        };

        let checkpoint_id = self
            .tree
            .append_to_branch(&branch, user_input.clone(), ai_response.clone())
            .await?;

        Ok(Turn {
            checkpoint_id,
            branch,
            exchange: Exchange::new(user_input, ai_response),
        })
    }
}

impl std::fmt::Debug for Conversation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conversation")
            .field("tree", &self.tree)
            .field("generator", &self.generator.name())
            .finish()
    }
}
