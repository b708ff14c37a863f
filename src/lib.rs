//! The rules engine for Gomoku, the N-in-a-row board game
//!
//! This crate owns the board state, applies moves and detects winning
//! lines. Rendering and input handling live in the frontend binary and
//! only ever read the state exposed here.
//!
//! # Basic Usage
//!
//! ```
//! use gomoku_core::{Game, GameStatus, Player, Position};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = Game::new(3, 3, Player::Black)?;
//!
//! game.make_move(Position::new(0, 0))?;
//! game.make_move(Position::new(1, 0))?;
//! game.make_move(Position::new(0, 1))?;
//! game.make_move(Position::new(1, 1))?;
//! let status = game.make_move(Position::new(0, 2))?;
//!
//! assert_eq!(status, GameStatus::Won(Player::Black));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod error;

pub mod game;


pub use board::{Board, Cell, Position};
pub use error::{ConfigError, MoveError};
pub use game::{Game, GameStatus, Player};

/// The side length of a standard Gomoku board, in cells
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// The run length that wins a standard game
pub const DEFAULT_WIN_LENGTH: usize = 5;

// ensure the standard winning run fits on the standard board
const_assert!(DEFAULT_WIN_LENGTH >= 1 && DEFAULT_WIN_LENGTH <= DEFAULT_BOARD_SIZE);
