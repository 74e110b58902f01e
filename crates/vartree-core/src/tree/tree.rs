use crate::tree::{
    error::TreeError,
    node::{Branch, MoveNode},
    path::{Path, ROOT_BRANCH_INDEX},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of inserting a move: where the new node lives, and whether the
/// insertion opened a new branch rather than extending a sequence.
pub struct MoveInsertion {
    pub path: Path,
    pub new_branch: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Branching move history: the main line, plus variations that diverge
/// before the first main-line move ever gets played.
///
/// Root branches are held separately because they have no preceding node to
/// anchor to; every other branch hangs off the node whose move it follows.
/// The pair is one unit of mutation — the extend-vs-branch decision in
/// [`MoveTree::add_move`] depends on the exact current shape, so it must
/// never run against a stale copy.
pub struct MoveTree<M> {
    main_line: Vec<MoveNode<M>>,
    root_branches: Vec<Branch<M>>,
}

impl<M> Default for MoveTree<M> {
    fn default() -> Self {
        MoveTree {
            main_line: Vec::new(),
            root_branches: Vec::new(),
        }
    }
}

impl<M> MoveTree<M> {
    /// Create an empty tree: no main-line moves, no root branches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a tree from already-built parts. Deserialized parts should
    /// go through `StudySnapshot::validate` first.
    pub fn from_parts(main_line: Vec<MoveNode<M>>, root_branches: Vec<Branch<M>>) -> Self {
        MoveTree {
            main_line,
            root_branches,
        }
    }

    /// Main-line nodes in play order.
    pub fn main_line(&self) -> &[MoveNode<M>] {
        &self.main_line
    }

    /// Variations that diverge before the first main-line move.
    pub fn root_branches(&self) -> &[Branch<M>] {
        &self.root_branches
    }

    /// True when no move has been recorded anywhere.
    pub fn is_empty(&self) -> bool {
        self.main_line.is_empty() && self.root_branches.is_empty()
    }

    fn checked_index(value: i32) -> Option<usize> {
        usize::try_from(value).ok()
    }

    /// Resolve a path to its node.
    ///
    /// Out-of-range indices at any step return `None`; the start path
    /// addresses no node, and neither does a bare root sentinel.
    pub fn node_at(&self, path: &Path) -> Option<&MoveNode<M>> {
        let head = path.head()?;
        let mut pairs = path.pairs();

        let mut node = if head == ROOT_BRANCH_INDEX {
            let (branch, mv) = pairs.next()?;
            let sequence = self.root_branches.get(Self::checked_index(branch)?)?;
            sequence.get(Self::checked_index(mv)?)?
        } else {
            self.main_line.get(Self::checked_index(head)?)?
        };

        for (branch, mv) in pairs {
            let sequence = node.branches().get(Self::checked_index(branch)?)?;
            node = sequence.get(Self::checked_index(mv)?)?;
        }

        Some(node)
    }

    /// Branch sequences offered as alternatives at a path: the root branch
    /// list for the start path, the addressed node's branches otherwise.
    pub fn branches_at(&self, path: &Path) -> Option<&[Branch<M>]> {
        if path.is_start() {
            return Some(&self.root_branches);
        }
        self.node_at(path).map(MoveNode::branches)
    }

    /// Moves to replay, in order, to reach `path` from the start position.
    ///
    /// Descending into a branch still includes the anchor move: main-line
    /// moves run through the head index inclusive, then each branch segment
    /// contributes its moves through the target index inclusive. Root-branch
    /// paths replay only branch moves.
    pub fn moves_along(&self, path: &Path) -> Option<Vec<&M>> {
        if path.is_start() {
            return Some(Vec::new());
        }

        let head = path.head()?;
        let mut pairs = path.pairs();
        let mut moves = Vec::new();

        let mut node = if head == ROOT_BRANCH_INDEX {
            let (branch, mv) = pairs.next()?;
            let sequence = self.root_branches.get(Self::checked_index(branch)?)?;
            Self::collect_through(sequence, Self::checked_index(mv)?, &mut moves)?
        } else {
            let target = Self::checked_index(head)?;
            if target >= self.main_line.len() {
                return None;
            }
            for played in &self.main_line[..=target] {
                moves.push(played.mv());
            }
            &self.main_line[target]
        };

        for (branch, mv) in pairs {
            let sequence = node.branches().get(Self::checked_index(branch)?)?;
            node = Self::collect_through(sequence, Self::checked_index(mv)?, &mut moves)?;
        }

        Some(moves)
    }

    /// Push a branch's moves up to and including `target`, returning the
    /// target node.
    fn collect_through<'a>(
        sequence: &'a Branch<M>,
        target: usize,
        moves: &mut Vec<&'a M>,
    ) -> Option<&'a MoveNode<M>> {
        if target >= sequence.len() {
            return None;
        }
        for played in &sequence.nodes()[..=target] {
            moves.push(played.mv());
        }
        sequence.get(target)
    }

    /// Sequential 0-based index of the move at `path`: main-line moves
    /// through the head, plus `moveIdx + 1` per descended branch segment.
    ///
    /// `None` for the start path and for unresolvable paths — the idiomatic
    /// rendition of the source's `-1` sentinel.
    pub fn absolute_move_index(&self, path: &Path) -> Option<usize> {
        let head = path.head()?;
        let mut pairs = path.pairs();
        let mut total;

        let mut node = if head == ROOT_BRANCH_INDEX {
            let (branch, mv) = pairs.next()?;
            let sequence = self.root_branches.get(Self::checked_index(branch)?)?;
            let target = Self::checked_index(mv)?;
            total = target;
            sequence.get(target)?
        } else {
            let target = Self::checked_index(head)?;
            total = target;
            self.main_line.get(target)?
        };

        for (branch, mv) in pairs {
            let sequence = node.branches().get(Self::checked_index(branch)?)?;
            let target = Self::checked_index(mv)?;
            total += target + 1;
            node = sequence.get(target)?;
        }

        Some(total)
    }

    /// Insert `mv` as a new node reachable from `path`, the sole mutator.
    ///
    /// Inserting at the last node of a sequence (main line or branch)
    /// extends that sequence in place; inserting anywhere else opens a new
    /// branch on the addressed node, leaving the existing continuation
    /// untouched. An unresolvable path rejects the whole operation before
    /// any mutation happens.
    pub fn add_move(&mut self, path: &Path, mv: M) -> Result<MoveInsertion, TreeError> {
        if path.is_start() {
            if self.is_empty() {
                self.main_line.push(MoveNode::new(mv));
                return Ok(MoveInsertion {
                    path: Path::main(0),
                    new_branch: false,
                });
            }

            // Moves already exist, so a fresh move from the start position
            // necessarily diverges: open a new root branch.
            self.root_branches.push(Branch::new(MoveNode::new(mv)));
            return Ok(MoveInsertion {
                path: Path::root_branch(self.root_branches.len() - 1, 0),
                new_branch: true,
            });
        }

        let head = path.head().ok_or_else(|| TreeError::UnresolvedPath {
            path: path.clone(),
        })?;

        if path.segments().len() == 1 {
            // A bare root sentinel addresses no node.
            if head == ROOT_BRANCH_INDEX {
                return Err(TreeError::UnresolvedPath { path: path.clone() });
            }

            let index = Self::checked_index(head)
                .filter(|index| *index < self.main_line.len())
                .ok_or_else(|| TreeError::UnresolvedPath { path: path.clone() })?;

            if index + 1 == self.main_line.len() {
                self.main_line.push(MoveNode::new(mv));
                return Ok(MoveInsertion {
                    path: Path::main(index + 1),
                    new_branch: false,
                });
            }

            // Mid-line target: the continuation already exists, so the new
            // move becomes a branch on the addressed node.
            let branch = self.main_line[index].attach_branch(MoveNode::new(mv));
            return Ok(MoveInsertion {
                path: path.descend(branch, 0),
                new_branch: true,
            });
        }

        let (sequence, index) =
            self.sequence_at_mut(path)
                .ok_or_else(|| TreeError::UnresolvedPath {
                    path: path.clone(),
                })?;

        if index + 1 == sequence.len() {
            sequence.push(MoveNode::new(mv));
            return Ok(MoveInsertion {
                path: path.next_in_sequence(),
                new_branch: false,
            });
        }

        let branch = match sequence.get_mut(index) {
            Some(node) => node.attach_branch(MoveNode::new(mv)),
            None => return Err(TreeError::UnresolvedPath { path: path.clone() }),
        };
        Ok(MoveInsertion {
            path: path.descend(branch, 0),
            new_branch: true,
        })
    }

    /// Resolve the branch sequence owning the node at a multi-element path,
    /// plus the node's index within it. Mutation is strict about shape:
    /// a dangling element after the last pair fails the resolution.
    fn sequence_at_mut(&mut self, path: &Path) -> Option<(&mut Branch<M>, usize)> {
        if !path.tail_is_paired() {
            return None;
        }

        let head = path.head()?;
        let mut pairs = path.pairs();
        let (first_branch, first_move) = pairs.next()?;

        let mut sequence = if head == ROOT_BRANCH_INDEX {
            self.root_branches
                .get_mut(Self::checked_index(first_branch)?)?
        } else {
            let anchor = self.main_line.get_mut(Self::checked_index(head)?)?;
            anchor
                .branches_mut()
                .get_mut(Self::checked_index(first_branch)?)?
        };
        let mut index = Self::checked_index(first_move)?;

        for (branch, mv) in pairs {
            let node = sequence.get_mut(index)?;
            sequence = node.branches_mut().get_mut(Self::checked_index(branch)?)?;
            index = Self::checked_index(mv)?;
        }

        if index < sequence.len() {
            Some((sequence, index))
        } else {
            None
        }
    }
}
