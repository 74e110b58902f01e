use crate::tree::{error::ReplayError, path::Path, tree::MoveTree};

/// Replay the moves leading to `path` through a fallible apply step.
///
/// `apply` is the rules-oracle boundary: it consumes one stored move and
/// advances the oracle's position, or fails if the move does not fit. A
/// failure means the tree and its starting position are out of sync, so it
/// is surfaced with the offending move index rather than swallowed.
///
/// Returns the number of moves applied. The start path replays nothing.
pub fn replay_along_path<M, E, FApply>(
    tree: &MoveTree<M>,
    path: &Path,
    mut apply: FApply,
) -> Result<usize, ReplayError<E>>
where
    FApply: FnMut(&M) -> Result<(), E>,
{
    let moves = tree
        .moves_along(path)
        .ok_or_else(|| ReplayError::UnresolvedPath { path: path.clone() })?;
    let count = moves.len();

    for (index, mv) in moves.into_iter().enumerate() {
        apply(mv).map_err(|source| ReplayError::IllegalMove { index, source })?;
    }

    Ok(count)
}
