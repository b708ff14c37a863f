//! The game state machine: turn order, move application and win detection

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::{Board, Cell, Position};
use crate::error::{ConfigError, MoveError};

/// One of the two players
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Returns the other player
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The cell value this player's stones occupy
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// The two states of the game machine
///
/// `Won` is terminal: once entered, every further move is rejected.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
}

// the four line orientations through a cell, as unit steps
const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A game in play: the board, the active player and the winner, if any
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Player,
    win_length: usize,
    winner: Option<Player>,
}

impl Game {
    /// Creates a game on an empty `board_size` x `board_size` board
    ///
    /// A run of `win_length` stones wins the game, and `starter` moves
    /// first.
    #[instrument]
    pub fn new(board_size: usize, win_length: usize, starter: Player) -> Result<Self, ConfigError> {
        let board = Board::new(board_size)?;
        // a run longer than the board can never be completed
        if win_length < 1 || win_length > board_size {
            return Err(ConfigError::InvalidWinLength(win_length, board_size));
        }
        Ok(Self {
            board,
            turn: starter,
            win_length,
            winner: None,
        })
    }

    /// Applies the active player's move at `position`
    ///
    /// On success the stone is placed, win detection runs rooted at the new
    /// stone, and the turn passes to the opponent unless the move ended the
    /// game. On any error the game is left exactly as it was.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn make_move(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_on_board(position) {
            return Err(MoveError::OutOfBounds(position));
        }
        if !self.board.get(position)?.is_empty() {
            return Err(MoveError::CellOccupied(position));
        }

        let player = self.turn;
        self.board.set(position, player.cell())?;
        if self.check_winning_move(position, player) {
            debug!(%player, "winning run completed");
            self.winner = Some(player);
        } else {
            self.turn = player.opponent();
        }
        Ok(self.status())
    }

    /// The winner, or `None` while the game is in progress
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The player entitled to the next move
    ///
    /// Once a winner is declared this stays on the winning player and no
    /// longer advances.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Reads the cell at `position`
    pub fn cell(&self, position: Position) -> Result<Cell, MoveError> {
        self.board.get(position)
    }

    /// The current machine state
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    // check alignment along the four axes through the stone just placed at
    // `position`, counting outwards in both directions of each axis
    fn check_winning_move(&self, position: Position, player: Player) -> bool {
        let stone = player.cell();
        for &(d_row, d_col) in AXES.iter() {
            // the new stone itself
            let mut run = 1;
            for &sign in [-1i32, 1].iter() {
                let mut row = position.row + sign * d_row;
                let mut col = position.col + sign * d_col;
                loop {
                    if self.board.get(Position::new(row, col)) != Ok(stone) {
                        break;
                    }
                    row += sign * d_row;
                    col += sign * d_col;
                    run += 1;
                }
            }
            if run >= self.win_length {
                return true;
            }
        }

        false
    }
}
