use serde::{Deserialize, Serialize};

use crate::tree::{
    comments::CommentStore,
    error::TreeError,
    node::{Branch, MoveNode},
    path::Path,
    tree::MoveTree,
};

/// Current snapshot schema version.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

fn schema_version_default() -> u32 {
    SNAPSHOT_SCHEMA_VERSION
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(serialize = "M: Serialize", deserialize = "M: Deserialize<'de>"))]
/// Wholesale serialized study state: starting position, move tree, root
/// branches, comments, the path being viewed, and board orientation.
///
/// Field names follow the persisted JSON record (`moveTree`,
/// `rootBranches`, `currentPath`, `isFlipped`).
pub struct StudySnapshot<M> {
    #[serde(default = "schema_version_default")]
    pub schema_version: u32,
    /// Starting position as a FEN string.
    pub position: String,
    pub move_tree: Vec<MoveNode<M>>,
    #[serde(default)]
    pub root_branches: Vec<Branch<M>>,
    #[serde(default)]
    pub current_path: Path,
    #[serde(default)]
    pub is_flipped: bool,
    #[serde(default)]
    pub comments: CommentStore,
}

impl<M> StudySnapshot<M> {
    /// Capture a snapshot of a tree plus its sidecar state.
    pub fn capture(
        position: impl Into<String>,
        tree: &MoveTree<M>,
        current_path: &Path,
        is_flipped: bool,
        comments: &CommentStore,
    ) -> Self
    where
        M: Clone,
    {
        StudySnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            position: position.into(),
            move_tree: tree.main_line().to_vec(),
            root_branches: tree.root_branches().to_vec(),
            current_path: current_path.clone(),
            is_flipped,
            comments: comments.clone(),
        }
    }

    /// Rebuild the tree held by this snapshot.
    pub fn restore_tree(&self) -> MoveTree<M>
    where
        M: Clone,
    {
        MoveTree::from_parts(self.move_tree.clone(), self.root_branches.clone())
    }

    /// Check structural invariants on deserialized data: every branch
    /// sequence anywhere in the tree must hold at least one node.
    pub fn validate(&self) -> Result<(), TreeError> {
        for sequence in &self.root_branches {
            Self::validate_sequence(sequence)?;
        }
        for node in &self.move_tree {
            Self::validate_node(node)?;
        }
        Ok(())
    }

    fn validate_sequence(sequence: &Branch<M>) -> Result<(), TreeError> {
        if sequence.is_empty() {
            return Err(TreeError::EmptyBranch);
        }
        for node in sequence.nodes() {
            Self::validate_node(node)?;
        }
        Ok(())
    }

    fn validate_node(node: &MoveNode<M>) -> Result<(), TreeError> {
        for sequence in node.branches() {
            Self::validate_sequence(sequence)?;
        }
        Ok(())
    }
}
