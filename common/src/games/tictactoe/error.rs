use derive_more::{Display, Error};

use super::types::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display("Cell {coordinate} is already marked")]
    IllegalMove { coordinate: Coordinate },
    #[display("Position {coordinate} is outside the {size}x{size} board")]
    OutOfBounds { coordinate: Coordinate, size: usize },
    #[display("No moves available, the game is already over")]
    NoMovesAvailable,
    #[display("Game is already over")]
    GameFinished,
    #[display("Not your turn")]
    NotYourTurn,
    #[display("Players must use two distinct non-empty marks")]
    InvalidMarks,
    #[display("Malformed board: {reason}")]
    MalformedBoard { reason: String },
}
