use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, MoveError};

/// The occupancy of a single board cell
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

/// A (row, column) coordinate pair on the board
///
/// Coordinates are signed so that out-of-range input can be carried to the
/// bounds check rather than failing at construction.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A square grid of cells with bounds-checked access
///
/// The board knows nothing about turn order or winning; it only stores
/// stones and answers bounds and occupancy queries.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>, // cells are stored row-major, top-to-bottom
    size: usize,
}

impl Board {
    /// Creates an empty `size` x `size` board
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidSize(size));
        }
        Ok(Self {
            cells: vec![Cell::Empty; size * size],
            size,
        })
    }

    /// The side length of the board, in cells
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true iff both coordinates of `position` lie in `[0, size)`
    pub fn is_on_board(&self, position: Position) -> bool {
        let size = self.size as i32;
        position.row >= 0 && position.row < size && position.col >= 0 && position.col < size
    }

    /// Reads the cell at `position`
    pub fn get(&self, position: Position) -> Result<Cell, MoveError> {
        if !self.is_on_board(position) {
            return Err(MoveError::OutOfBounds(position));
        }
        Ok(self.cells[self.index(position)])
    }

    /// Writes `cell` at `position`
    pub fn set(&mut self, position: Position, cell: Cell) -> Result<(), MoveError> {
        if !self.is_on_board(position) {
            return Err(MoveError::OutOfBounds(position));
        }
        let index = self.index(position);
        self.cells[index] = cell;
        Ok(())
    }

    fn index(&self, position: Position) -> usize {
        position.row as usize * self.size + position.col as usize
    }
}
