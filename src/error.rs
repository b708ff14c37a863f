//! Typed errors reported by the rules engine

use crate::board::Position;

/// Errors from constructing a board or game with an unplayable configuration
///
/// These are not recoverable: the caller must fix the configuration and
/// construct a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// The board must hold at least one cell
    #[display("invalid board size {}, the board must be at least 1x1", _0)]
    InvalidSize(usize),

    /// The winning run must fit on the board
    #[display("invalid win length {} for a board of size {}", _0, _1)]
    InvalidWinLength(usize, usize),
}

impl std::error::Error for ConfigError {}

/// Errors from attempting an illegal move
///
/// These are recoverable: the game state is left exactly as it was, and the
/// caller may retry with another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position lies outside the board
    #[display("{} is off the board", _0)]
    OutOfBounds(Position),

    /// The targeted cell already holds a stone
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// A winner has already been declared
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
