//! Error types for board queries and moves

use crate::board::Pos;

/// Every failure is caller input validation; the board is never left
/// partially mutated after an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("position {0} is outside the 8x8 grid")]
    OutOfBounds(Pos),

    #[error("illegal move at {0}: cell occupied or no capture in any direction")]
    IllegalMove(Pos),

    #[error("invalid color {0:?}: expected \"black\" or \"white\"")]
    InvalidColor(String),
}
