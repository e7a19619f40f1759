//! Move legality and application for both placement rules.

use serde::{Deserialize, Serialize};

use super::board::{Board, Position};
use super::player::PlayerId;
use crate::error::IllegalMoveError;

/// How a move selects its target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GravityMode {
    /// A move names a column; the piece settles in its lowest open row.
    #[serde(rename = "drop")]
    DropToLowestOpenRow,
    /// A move names an exact cell.
    #[serde(rename = "direct")]
    DirectPlacement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Column(usize),
    Cell(Position),
}

impl Move {
    /// Decode a flat action id: the column in drop mode, `row * cols + col`
    /// in direct mode.
    pub fn from_action(mode: GravityMode, cols: usize, action: usize) -> Move {
        match mode {
            GravityMode::DropToLowestOpenRow => Move::Column(action),
            GravityMode::DirectPlacement => {
                Move::Cell(Position::new(action / cols.max(1), action % cols.max(1)))
            }
        }
    }

    /// Inverse of [`Move::from_action`].
    pub fn to_action(self, cols: usize) -> usize {
        match self {
            Move::Column(col) => col,
            Move::Cell(pos) => pos.row * cols + pos.col,
        }
    }
}

/// Size of the action space (and the legal-move mask).
pub fn action_count(board: &Board, mode: GravityMode) -> usize {
    match mode {
        GravityMode::DropToLowestOpenRow => board.cols(),
        GravityMode::DirectPlacement => board.rows() * board.cols(),
    }
}

/// Columns whose top cell is still empty.
pub fn legal_columns(board: &Board) -> Vec<usize> {
    (0..board.cols())
        .filter(|&col| !board.is_column_full(col))
        .collect()
}

/// Every empty cell, row-major.
pub fn legal_cells(board: &Board) -> Vec<Position> {
    board
        .iter()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(pos, _)| pos)
        .collect()
}

/// Boolean mask over the action space, `true` where the move is legal.
pub fn legal_mask(board: &Board, mode: GravityMode) -> Vec<bool> {
    match mode {
        GravityMode::DropToLowestOpenRow => (0..board.cols())
            .map(|col| !board.is_column_full(col))
            .collect(),
        GravityMode::DirectPlacement => board.iter().map(|(_, cell)| cell.is_empty()).collect(),
    }
}

/// Validate `target` and place `player`'s piece, returning the landing cell.
///
/// The board is unchanged on error.
pub fn apply(
    board: &mut Board,
    mode: GravityMode,
    player: PlayerId,
    target: Move,
) -> Result<Position, IllegalMoveError> {
    let landing = match (mode, target) {
        (GravityMode::DropToLowestOpenRow, Move::Column(col)) => {
            if col >= board.cols() {
                return Err(IllegalMoveError::ColumnOutOfRange {
                    column: col,
                    columns: board.cols(),
                });
            }
            let row = board
                .landing_row(col)
                .ok_or(IllegalMoveError::ColumnFull(col))?;
            Position::new(row, col)
        }
        (GravityMode::DirectPlacement, Move::Cell(pos)) => pos,
        _ => return Err(IllegalMoveError::WrongMoveKind),
    };

    board.place(landing, player)?;
    Ok(landing)
}
