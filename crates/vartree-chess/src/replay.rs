use vartree_core::{MoveTree, Path, ReplayError, TreeError, replay_along_path};

use crate::{error::ChessError, moves::ChessMove, oracle::ChessOracle};

/// Reset the oracle and replay the moves leading to `path`.
///
/// `start_fen` overrides the standard starting position. A stored move the
/// oracle rejects surfaces as [`ChessError::ReplayDiverged`] with its index
/// in the replay sequence: the persisted tree and position are
/// inconsistent, and the caller decides whether to discard or repair.
pub fn load_position_from_path(
    oracle: &mut ChessOracle,
    tree: &MoveTree<ChessMove>,
    path: &Path,
    start_fen: Option<&str>,
) -> Result<(), ChessError> {
    match start_fen {
        Some(fen) => oracle.reset_to(fen)?,
        None => oracle.reset(),
    }

    replay_along_path(tree, path, |record| oracle.apply_recorded(record)).map_err(
        |err| match err {
            ReplayError::UnresolvedPath { path } => {
                ChessError::Tree(TreeError::UnresolvedPath { path })
            }
            ReplayError::IllegalMove { index, source } => ChessError::ReplayDiverged {
                index,
                source: Box::new(source),
            },
        },
    )?;

    Ok(())
}
