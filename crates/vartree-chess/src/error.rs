use thiserror::Error;

use vartree_core::TreeError;

#[derive(Debug, Error)]
/// Error type for oracle, replay, study, and IO operations.
pub enum ChessError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("'{text}' is not a square name")]
    InvalidSquare { text: String },

    #[error("'{letter}' is not a promotion piece")]
    InvalidPromotion { letter: char },

    #[error("illegal move {from}{to} in position '{fen}'")]
    IllegalMove {
        from: String,
        to: String,
        fen: String,
    },

    #[error("stored move '{san}' does not apply to position '{fen}'")]
    StoredMoveRejected { san: String, fen: String },

    /// A persisted tree replayed a move its own position rejects: the study
    /// data is corrupt, not merely mis-addressed.
    #[error("replay diverged at move {index}: {source}")]
    ReplayDiverged {
        index: usize,
        #[source]
        source: Box<ChessError>,
    },

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("failed to read study file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse study JSON: {0}")]
    Json(#[from] serde_json::Error),
}
