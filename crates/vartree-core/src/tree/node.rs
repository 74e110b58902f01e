use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "M: Serialize", deserialize = "M: Deserialize<'de>"))]
/// One recorded move and the alternative continuations anchored to it.
///
/// Branches stored here start immediately *after* this node's move. Every
/// navigation and modification routine relies on that anchoring: the moves
/// replayed to reach a branch always include the anchor move itself.
pub struct MoveNode<M> {
    #[serde(rename = "move")]
    mv: M,
    #[serde(default)]
    branches: Vec<Branch<M>>,
}

impl<M> MoveNode<M> {
    /// Create a node with no branches.
    pub fn new(mv: M) -> Self {
        MoveNode {
            mv,
            branches: Vec::new(),
        }
    }

    /// The move recorded at this node.
    pub fn mv(&self) -> &M {
        &self.mv
    }

    /// Alternative continuations starting after this node's move.
    pub fn branches(&self) -> &[Branch<M>] {
        &self.branches
    }

    pub(crate) fn branches_mut(&mut self) -> &mut Vec<Branch<M>> {
        &mut self.branches
    }

    /// Attach a new single-node branch after this node's move and return
    /// its index in the branch list.
    pub(crate) fn attach_branch(&mut self, first: MoveNode<M>) -> usize {
        self.branches.push(Branch::new(first));
        self.branches.len() - 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// A linear variation: an ordered sequence of nodes, never empty once
/// created. Growth happens only through `push`; deserialized data is
/// checked by snapshot validation instead.
pub struct Branch<M> {
    nodes: Vec<MoveNode<M>>,
}

impl<M> Branch<M> {
    /// Create a branch from its first node.
    pub fn new(first: MoveNode<M>) -> Self {
        Branch { nodes: vec![first] }
    }

    /// Number of nodes in this branch.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Only true for data that bypassed the constructor, e.g. a malformed
    /// deserialized record.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at `index` within this branch.
    pub fn get(&self, index: usize) -> Option<&MoveNode<M>> {
        self.nodes.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut MoveNode<M>> {
        self.nodes.get_mut(index)
    }

    /// All nodes in play order.
    pub fn nodes(&self) -> &[MoveNode<M>] {
        &self.nodes
    }

    pub(crate) fn push(&mut self, node: MoveNode<M>) {
        self.nodes.push(node);
    }
}
