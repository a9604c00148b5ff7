//! Tests for the conversation tree

use super::manager::TreeState;
use super::*;
use crate::error::TreeError;
use chrono::Utc;

fn exchanges(pairs: &[(&str, &str)]) -> Vec<Exchange> {
    pairs.iter().map(|&(u, a)| Exchange::new(u, a)).collect()
}

#[test]
fn test_checkpoint_id() {
    let id1 = CheckpointId::new();
    let id2 = CheckpointId::new();
    assert_ne!(id1, id2);
    assert!(!id1.as_str().is_empty());
}

#[test]
fn test_checkpoint_id_text_round_trip() {
    let id = CheckpointId::new();
    let parsed: CheckpointId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);

    let pasted: CheckpointId = format!("  {id}\n").parse().unwrap();
    assert_eq!(pasted, id);
}

#[test]
fn test_checkpoint_id_conversions_agree_with_parse() {
    let text = " abc\t";
    let parsed: CheckpointId = text.parse().unwrap();
    assert_eq!(CheckpointId::from(text), parsed);
    assert_eq!(CheckpointId::from(text.to_string()), parsed);
    assert_eq!(parsed.as_str(), "abc");
}

#[tokio::test]
async fn test_append_to_named_branch_leaves_active_alone() {
    let tree = ConversationTree::new();
    let first = tree.append_exchange("hi", "hello").await;
    tree.create_branch("alt", &first).await.unwrap();

    let id = tree.append_to_branch("alt", "side", "note").await.unwrap();

    assert_eq!(tree.current_branch_name().await, "main");
    assert_eq!(tree.current_head().await, Some(first.clone()));
    assert_eq!(tree.head_of("alt").await.unwrap(), Some(id.clone()));
    assert_eq!(tree.get_checkpoint(&id).await.unwrap().parent_id, Some(first));

    let err = tree.append_to_branch("nowhere", "q", "a").await.unwrap_err();
    assert_eq!(err, TreeError::unknown_branch("nowhere"));
    assert_eq!(tree.checkpoint_count().await, 2);
}

#[tokio::test]
async fn test_current_history_names_its_branch() {
    let tree = ConversationTree::new();
    tree.append_exchange("hi", "hello").await;
    tree.fork_current("alt").await.unwrap();
    tree.switch_branch("alt").await.unwrap();

    let (branch, history) = tree.current_history().await.unwrap();
    assert_eq!(branch, "alt");
    assert_eq!(history, exchanges(&[("hi", "hello")]));
}

#[tokio::test]
async fn test_new_tree_has_empty_main_branch() {
    let tree = ConversationTree::new();

    assert_eq!(tree.current_branch_name().await, DEFAULT_BRANCH);
    assert_eq!(tree.list_branch_names().await, vec!["main".to_string()]);
    assert!(tree.list_checkpoint_ids().await.is_empty());
    assert!(tree.get_history().await.unwrap().is_empty());
    assert!(tree.get_branch("main").await.unwrap().is_empty());
    assert_eq!(tree.current_head().await, None);
}

#[tokio::test]
async fn test_append_links_parent_and_advances_head() {
    let tree = ConversationTree::new();

    let first = tree.append_exchange("hi", "hello").await;
    let second = tree.append_exchange("how are you", "fine").await;

    let root = tree.get_checkpoint(&first).await.unwrap();
    assert!(root.is_root());
    assert_eq!(root.exchange, Exchange::new("hi", "hello"));

    let child = tree.get_checkpoint(&second).await.unwrap();
    assert_eq!(child.parent_id, Some(first.clone()));
    assert!(child.sequence > root.sequence);

    assert_eq!(tree.current_head().await, Some(second.clone()));
    assert_eq!(tree.list_checkpoint_ids().await, vec![first, second]);
}

#[tokio::test]
async fn test_append_accepts_empty_text() {
    let tree = ConversationTree::new();
    tree.append_exchange("", "").await;

    assert_eq!(tree.get_history().await.unwrap(), exchanges(&[("", "")]));
}

#[tokio::test]
async fn test_history_is_chronological() {
    let tree = ConversationTree::new();
    let pairs: Vec<(String, String)> = (0..20)
        .map(|i| (format!("q{i}"), format!("a{i}")))
        .collect();

    for (q, a) in &pairs {
        tree.append_exchange(q.as_str(), a.as_str()).await;
    }

    let history = tree.get_history().await.unwrap();
    let expected: Vec<Exchange> = pairs.into_iter().map(Exchange::from).collect();
    assert_eq!(history, expected);
}

#[tokio::test]
async fn test_create_branch_does_not_switch() {
    let tree = ConversationTree::new();
    let first = tree.append_exchange("hi", "hello").await;

    tree.create_branch("alt", &first).await.unwrap();

    assert_eq!(tree.current_branch_name().await, "main");
    assert_eq!(tree.head_of("alt").await.unwrap(), Some(first));
    assert_eq!(
        tree.list_branch_names().await,
        vec!["alt".to_string(), "main".to_string()]
    );
}

#[tokio::test]
async fn test_create_branch_duplicate_leaves_state_unchanged() {
    let tree = ConversationTree::new();
    let first = tree.append_exchange("hi", "hello").await;
    let second = tree.append_exchange("more", "sure").await;
    tree.create_branch("alt", &first).await.unwrap();

    let before = tree.list_branches().await;

    let err = tree.create_branch("alt", &second).await.unwrap_err();
    assert_eq!(err, TreeError::duplicate_branch("alt"));

    let err = tree.create_branch("main", &first).await.unwrap_err();
    assert!(matches!(err, TreeError::DuplicateBranch { ref name } if name == "main"));

    assert_eq!(tree.list_branches().await, before);
}

#[tokio::test]
async fn test_duplicate_name_checked_before_checkpoint() {
    let tree = ConversationTree::new();
    let err = tree
        .create_branch("main", &CheckpointId::from("does-not-exist"))
        .await
        .unwrap_err();
    assert!(matches!(err, TreeError::DuplicateBranch { .. }));
}

#[tokio::test]
async fn test_create_branch_from_unknown_checkpoint() {
    let tree = ConversationTree::new();
    tree.append_exchange("hi", "hello").await;

    let err = tree
        .create_branch("x", &CheckpointId::from("does-not-exist"))
        .await
        .unwrap_err();

    assert_eq!(err, TreeError::unknown_checkpoint("does-not-exist"));
    assert_eq!(tree.list_branch_names().await, vec!["main".to_string()]);
}

#[tokio::test]
async fn test_switch_to_unknown_branch_keeps_current() {
    let tree = ConversationTree::new();

    let err = tree.switch_branch("nope").await.unwrap_err();

    assert_eq!(err, TreeError::unknown_branch("nope"));
    assert_eq!(tree.current_branch_name().await, "main");
}

#[tokio::test]
async fn test_switch_changes_append_target() {
    let tree = ConversationTree::new();
    let first = tree.append_exchange("hi", "hello").await;
    tree.create_branch("alt", &first).await.unwrap();

    tree.switch_branch("alt").await.unwrap();
    let on_alt = tree.append_exchange("alt question", "alt answer").await;

    assert_eq!(tree.head_of("main").await.unwrap(), Some(first.clone()));
    assert_eq!(tree.head_of("alt").await.unwrap(), Some(on_alt.clone()));
    assert_eq!(
        tree.get_checkpoint(&on_alt).await.unwrap().parent_id,
        Some(first)
    );
}

#[tokio::test]
async fn test_fork_current_copies_head() {
    let tree = ConversationTree::new();
    let first = tree.append_exchange("hi", "hello").await;

    let head = tree.fork_current("copy").await.unwrap();
    assert_eq!(head, Some(first.clone()));
    assert_eq!(tree.head_of("copy").await.unwrap(), Some(first));

    let err = tree.fork_current("copy").await.unwrap_err();
    assert!(matches!(err, TreeError::DuplicateBranch { .. }));
}

#[tokio::test]
async fn test_fork_of_empty_branch_is_empty() {
    let tree = ConversationTree::new();

    assert_eq!(tree.fork_current("scratch").await.unwrap(), None);

    tree.switch_branch("scratch").await.unwrap();
    assert!(tree.get_history().await.unwrap().is_empty());

    tree.append_exchange("fresh", "start").await;
    assert!(tree.history_of("main").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_history_of_named_branch() {
    let tree = ConversationTree::new();
    let first = tree.append_exchange("hi", "hello").await;
    tree.append_exchange("how are you", "fine").await;
    tree.create_branch("alt", &first).await.unwrap();

    assert_eq!(
        tree.history_of("alt").await.unwrap(),
        exchanges(&[("hi", "hello")])
    );
    assert!(matches!(
        tree.history_of("missing").await,
        Err(TreeError::UnknownBranch { .. })
    ));
}

#[tokio::test]
async fn test_get_branch_and_checkpoint_lookups() {
    let tree = ConversationTree::new();

    assert!(matches!(
        tree.get_branch("ghost").await,
        Err(TreeError::UnknownBranch { .. })
    ));
    assert!(matches!(
        tree.head_of("ghost").await,
        Err(TreeError::UnknownBranch { .. })
    ));
    assert!(matches!(
        tree.get_checkpoint(&CheckpointId::new()).await,
        Err(TreeError::UnknownCheckpoint { .. })
    ));
    assert_eq!(tree.branch_count().await, 1);
    assert_eq!(tree.checkpoint_count().await, 0);
}

#[tokio::test]
async fn test_clones_share_state() {
    let tree = ConversationTree::new();
    let handle = tree.clone();

    handle.append_exchange("hi", "hello").await;

    assert_eq!(tree.checkpoint_count().await, 1);
}

fn orphan(id: &str, parent: Option<&str>, sequence: u64) -> Checkpoint {
    Checkpoint {
        id: CheckpointId::from(id),
        exchange: Exchange::new(id, id),
        parent_id: parent.map(CheckpointId::from),
        sequence,
        created_at: Utc::now(),
    }
}

#[test]
fn test_walk_detects_dangling_parent() {
    let mut state = TreeState::new();
    let child = orphan("child", Some("gone"), 0);
    state.checkpoints.insert(child.id.clone(), child);

    let err = state
        .walk_history(Some(&CheckpointId::from("child")))
        .unwrap_err();

    assert!(matches!(err, TreeError::InvariantViolation { .. }));
    assert!(!err.is_user_error());
}

#[test]
fn test_walk_detects_cycle() {
    let mut state = TreeState::new();
    for checkpoint in [orphan("a", Some("b"), 0), orphan("b", Some("a"), 1)] {
        state.checkpoints.insert(checkpoint.id.clone(), checkpoint);
    }

    let err = state
        .walk_history(Some(&CheckpointId::from("a")))
        .unwrap_err();

    assert!(matches!(err, TreeError::InvariantViolation { .. }));
}

#[test]
fn test_walk_from_no_head_is_empty() {
    let state = TreeState::new();
    assert!(state.walk_history(None).unwrap().is_empty());
}
