use serde::{Deserialize, Serialize};
use shakmaty::{Role, Square};

use crate::error::ChessError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A fully-populated move record as stored in the tree.
///
/// Only the oracle constructs these. The tree stores and replays them
/// without inspecting chess semantics, so the fields stay plain strings
/// that serialize directly into the persisted record.
pub struct ChessMove {
    /// Source square, e.g. "e2".
    pub from: String,
    /// Destination square, e.g. "e4". Castling uses the king's target.
    pub to: String,
    /// Promotion piece letter ("q", "r", "b", "n"), when promoting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
    /// Standard algebraic notation, including any check/mate suffix.
    pub san: String,
    /// FEN of the position after the move.
    pub fen: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A move request as a client submits it: where from, where to, and what to
/// promote to. Legality is entirely the oracle's call.
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl MoveRequest {
    /// Create a request from already-typed squares.
    pub fn new(from: Square, to: Square, promotion: Option<Role>) -> Self {
        MoveRequest {
            from,
            to,
            promotion,
        }
    }

    /// Parse a request from square names and an optional promotion letter.
    pub fn parse(from: &str, to: &str, promotion: Option<char>) -> Result<Self, ChessError> {
        let from_square = from
            .parse::<Square>()
            .map_err(|_| ChessError::InvalidSquare {
                text: from.to_string(),
            })?;
        let to_square = to.parse::<Square>().map_err(|_| ChessError::InvalidSquare {
            text: to.to_string(),
        })?;
        let promotion_role = match promotion {
            Some(letter) => {
                Some(Role::from_char(letter).ok_or(ChessError::InvalidPromotion { letter })?)
            }
            None => None,
        };

        Ok(MoveRequest::new(from_square, to_square, promotion_role))
    }
}
