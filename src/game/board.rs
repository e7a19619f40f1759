use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Owner(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Owner(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Owner(player) => player.symbol(),
        }
    }
}

/// Grid coordinates. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed-size rectangular grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn empty(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Get the cell at a specific position
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.get(Position::new(row, col))
            .ok_or(BoardError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Cell lookup that yields `None` off the grid.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    /// Signed lookup used when walking lines off the edge of the grid.
    pub(crate) fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(Position::new(row as usize, col as usize))
    }

    /// Set an empty cell to `owner`.
    pub fn place(&mut self, pos: Position, owner: PlayerId) -> Result<(), BoardError> {
        match self.cell_at(pos.row, pos.col)? {
            Cell::Empty => {
                self.cells[pos.row * self.cols + pos.col] = Cell::Owner(owner);
                Ok(())
            }
            Cell::Owner(_) => Err(BoardError::CellOccupied {
                row: pos.row,
                col: pos.col,
            }),
        }
    }

    /// Check if a column's top cell is taken. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        match self.get(Position::new(0, col)) {
            Some(cell) => !cell.is_empty(),
            None => true,
        }
    }

    /// Lowest empty row in a column (where a dropped piece would land).
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.cells[row * self.cols + col].is_empty())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Row-major iteration over every position and its cell.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (Position::new(idx / cols, idx % cols), cell))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .map(|col| self.cells[row * self.cols + col].symbol().to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
