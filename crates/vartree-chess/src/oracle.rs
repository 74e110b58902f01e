use shakmaty::{
    CastlingMode, Chess, EnPassantMode, File, Move, Position, Square,
    fen::Fen,
    san::SanPlus,
};

use crate::{
    error::ChessError,
    moves::{ChessMove, MoveRequest},
};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Clone)]
/// Stateful move-legality oracle over a single board position.
///
/// The tree model never judges legality itself; every stored move passes
/// through here, both when first played and when replayed from persisted
/// data.
pub struct ChessOracle {
    position: Chess,
}

impl Default for ChessOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessOracle {
    /// Oracle at the standard starting position.
    pub fn new() -> Self {
        ChessOracle {
            position: Chess::default(),
        }
    }

    /// Oracle at an arbitrary FEN position.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let mut oracle = Self::new();
        oracle.reset_to(fen)?;
        Ok(oracle)
    }

    /// Reset to the standard starting position.
    pub fn reset(&mut self) {
        self.position = Chess::default();
    }

    /// Reset to an arbitrary FEN position.
    pub fn reset_to(&mut self, fen: &str) -> Result<(), ChessError> {
        let parsed: Fen = fen.parse().map_err(|err| ChessError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{err}"),
        })?;
        self.position = parsed
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(|err| ChessError::InvalidFen {
                fen: fen.to_string(),
                reason: format!("{err}"),
            })?;
        Ok(())
    }

    /// Borrow the underlying position.
    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Current position as FEN.
    pub fn fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    /// Requests for every legal move in the current position.
    pub fn legal_moves(&self) -> Vec<MoveRequest> {
        self.position
            .legal_moves()
            .iter()
            .filter_map(|candidate| {
                Some(MoveRequest::new(
                    candidate.from()?,
                    effective_to(candidate),
                    candidate.promotion(),
                ))
            })
            .collect()
    }

    /// Validate a request against the current position. On success the
    /// position advances and a fully-populated record comes back; an
    /// illegal request leaves the position untouched.
    pub fn play(&mut self, request: MoveRequest) -> Result<ChessMove, ChessError> {
        let candidate = self
            .position
            .legal_moves()
            .iter()
            .find(|candidate| {
                candidate.from() == Some(request.from)
                    && effective_to(candidate) == request.to
                    && candidate.promotion() == request.promotion
            })
            .cloned()
            .ok_or_else(|| ChessError::IllegalMove {
                from: request.from.to_string(),
                to: request.to.to_string(),
                fen: self.fen(),
            })?;

        let san = SanPlus::from_move(self.position.clone(), &candidate).to_string();
        self.position.play_unchecked(&candidate);

        Ok(ChessMove {
            from: request.from.to_string(),
            to: request.to.to_string(),
            promotion: candidate.promotion().map(|role| role.char().to_string()),
            san,
            fen: self.fen(),
        })
    }

    /// Re-apply a stored move during replay. The SAN text is the source of
    /// truth; a record that no longer reads against the current position
    /// marks the tree as out of sync with its starting position.
    pub fn apply_recorded(&mut self, record: &ChessMove) -> Result<(), ChessError> {
        let san: SanPlus = record
            .san
            .parse()
            .map_err(|_| ChessError::StoredMoveRejected {
                san: record.san.clone(),
                fen: self.fen(),
            })?;
        let candidate =
            san.san
                .to_move(&self.position)
                .map_err(|_| ChessError::StoredMoveRejected {
                    san: record.san.clone(),
                    fen: self.fen(),
                })?;
        self.position.play_unchecked(&candidate);
        Ok(())
    }
}

/// Destination square as a client would phrase it: the king's target for
/// castling, the arrival square otherwise. shakmaty encodes castling as
/// king-takes-rook.
fn effective_to(candidate: &Move) -> Square {
    match candidate {
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() {
                File::G
            } else {
                File::C
            };
            Square::from_coords(file, king.rank())
        }
        _ => candidate.to(),
    }
}
