use std::fmt;

use crate::tree::path::Path;

/// Error type for move-tree mutation and path parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A mutation target path did not resolve to a node.
    UnresolvedPath { path: Path },
    /// A path string could not be parsed back into integers.
    MalformedPath { text: String },
    /// A deserialized tree contained an empty branch sequence.
    EmptyBranch,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::UnresolvedPath { path } => {
                write!(f, "path '{path}' does not resolve to a node")
            }
            TreeError::MalformedPath { text } => {
                write!(f, "cannot parse '{text}' as a move path")
            }
            TreeError::EmptyBranch => write!(f, "tree contains an empty branch sequence"),
        }
    }
}

impl std::error::Error for TreeError {}

/// Error type for replaying the moves along a path through a rules oracle.
///
/// `IllegalMove` means a stored move no longer applies to the position it
/// should follow: the tree and its starting position are out of sync. This
/// is a data-integrity failure and must reach the caller, never be
/// swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError<E> {
    /// The requested path did not resolve within the tree.
    UnresolvedPath { path: Path },
    /// The oracle rejected the move at `index` in the replay sequence.
    IllegalMove { index: usize, source: E },
}

impl<E: fmt::Display> fmt::Display for ReplayError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::UnresolvedPath { path } => {
                write!(f, "replay path '{path}' does not resolve to a node")
            }
            ReplayError::IllegalMove { index, source } => {
                write!(f, "replay rejected stored move {index}: {source}")
            }
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for ReplayError<E> {}
