use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tree::error::TreeError;

/// Reserved head element for paths into the root branch list,
/// i.e. variations that diverge before the first main-line move is played.
pub const ROOT_BRANCH_INDEX: i32 = -1;

/// Address of a node in a move tree.
///
/// Three shapes:
/// - `[]` — the starting position, no move played.
/// - `[mainIndex]` — a node on the main line.
/// - `[head, branchIdx, moveIdx, ...]` — descend through
///   `(branchIdx, moveIdx)` pairs, nested arbitrarily deep. `head` is a
///   main-line index, or [`ROOT_BRANCH_INDEX`] for a root-branch path.
///
/// Elements are signed so the root sentinel fits. Paths stay plain integer
/// lists: they serialize, compare, and key comment stores without a parallel
/// id scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path(Vec<i32>);

impl Path {
    /// Path of the starting position (no moves played).
    pub fn start() -> Self {
        Path(Vec::new())
    }

    /// Path of a main-line node.
    pub fn main(index: usize) -> Self {
        Path(vec![index as i32])
    }

    /// Path of a node directly inside a root branch.
    pub fn root_branch(branch: usize, mv: usize) -> Self {
        Path(vec![ROOT_BRANCH_INDEX, branch as i32, mv as i32])
    }

    /// Raw path elements.
    pub fn segments(&self) -> &[i32] {
        &self.0
    }

    /// First element, if any.
    pub fn head(&self) -> Option<i32> {
        self.0.first().copied()
    }

    /// True for the starting-position path.
    pub fn is_start(&self) -> bool {
        self.0.is_empty()
    }

    /// True iff this path descends into the root branch list.
    pub fn is_root_branch(&self) -> bool {
        self.head() == Some(ROOT_BRANCH_INDEX)
    }

    /// True iff this path addresses a main-line node directly.
    pub fn is_main_line(&self) -> bool {
        self.0.len() == 1 && self.0[0] >= 0
    }

    /// Nesting depth in branch levels, used for display indentation.
    /// A dangling element after the last complete pair is ignored.
    pub fn depth(&self) -> usize {
        if self.0.is_empty() { 0 } else { (self.0.len() - 1) / 2 }
    }

    /// Iterate the `(branchIdx, moveIdx)` pairs after the head.
    ///
    /// Navigation is permissive about malformed odd-length tails: a dangling
    /// element after the last complete pair is ignored here, while mutation
    /// rejects such paths up front via [`Path::tail_is_paired`].
    pub fn pairs(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.0
            .get(1..)
            .unwrap_or(&[])
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
    }

    /// Whether the tail after the head splits into complete pairs.
    pub(crate) fn tail_is_paired(&self) -> bool {
        self.0.len() <= 1 || (self.0.len() - 1) % 2 == 0
    }

    /// Child path descending into `branch` at `mv`.
    pub fn descend(&self, branch: usize, mv: usize) -> Path {
        let mut segments = self.0.clone();
        segments.push(branch as i32);
        segments.push(mv as i32);
        Path(segments)
    }

    /// Path of the next node in the same sequence: the final index advances
    /// by one. Stepping forward from the start goes to the first main-line
    /// node.
    pub fn next_in_sequence(&self) -> Path {
        match self.0.split_last() {
            Some((last, rest)) => {
                let mut segments = rest.to_vec();
                segments.push(last + 1);
                Path(segments)
            }
            None => Path::main(0),
        }
    }
}

impl From<Vec<i32>> for Path {
    fn from(segments: Vec<i32>) -> Self {
        Path(segments)
    }
}

/// Comma-joined integers; the empty path prints as the empty string.
/// This string is the sanctioned comment-store key, so any layer that
/// derives keys must go through it.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.0 {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}

/// Exact inverse of `Display` for every valid path, including the empty one.
impl FromStr for Path {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Path::start());
        }

        let segments = s
            .split(',')
            .map(|part| part.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| TreeError::MalformedPath {
                text: s.to_string(),
            })?;

        Ok(Path(segments))
    }
}
