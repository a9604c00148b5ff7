//! Checkpoint and branch types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Name of the branch every tree starts with
pub const DEFAULT_BRANCH: &str = "main";

/// Unique identifier for a checkpoint
///
/// Fresh ids are random UUID v4 strings. Any text parses into an id so that
/// a pasted token can be looked up; unknown ids surface at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CheckpointId(pub String);

impl CheckpointId {
    /// Create a new checkpoint ID
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the ID as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CheckpointId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CheckpointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CheckpointId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

impl From<&str> for CheckpointId {
    fn from(s: &str) -> Self {
        Self(s.trim().to_string())
    }
}

impl From<String> for CheckpointId {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

/// One user input paired with the assistant's response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub user_input: String,
    pub ai_response: String,
}

impl Exchange {
    pub fn new(user_input: impl Into<String>, ai_response: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            ai_response: ai_response.into(),
        }
    }
}

impl<U: Into<String>, A: Into<String>> From<(U, A)> for Exchange {
    fn from((user_input, ai_response): (U, A)) -> Self {
        Self::new(user_input, ai_response)
    }
}

/// Immutable record of one conversational turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Unique identifier
    pub id: CheckpointId,
    /// The recorded exchange
    pub exchange: Exchange,
    /// Checkpoint this one was appended after; `None` for a root
    pub parent_id: Option<CheckpointId>,
    /// Creation ordinal within the owning tree
    pub sequence: u64,
    /// When the checkpoint was created
    pub created_at: DateTime<Utc>,
}

impl Checkpoint {
    /// Check if this is a root checkpoint (no parent)
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Named, movable pointer into checkpoint history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name, unique within a tree
    pub name: String,
    /// Checkpoint the branch currently points to; `None` before the first exchange
    pub head: Option<CheckpointId>,
    /// When this branch was created
    pub created_at: DateTime<Utc>,
}

impl Branch {
    pub fn new(name: impl Into<String>, head: Option<CheckpointId>) -> Self {
        Self {
            name: name.into(),
            head,
            created_at: Utc::now(),
        }
    }

    /// Whether the branch has no history yet
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}
