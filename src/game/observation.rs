use serde::Serialize;

use super::board::Cell;
use super::moves::GravityMode;
use super::player::PlayerId;
use super::state::{GameOutcome, TurnState};

/// Raw owner id written for empty cells.
pub const EMPTY_CELL: i8 = -1;

/// Read-only view of a [`TurnState`], recomputed on every call to [`observe`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub rows: usize,
    pub cols: usize,
    /// Row-major owner ids: [`EMPTY_CELL`], 0 for the first player, 1 for the second.
    pub board: Vec<i8>,
    /// One entry per column in drop mode, one per cell in direct mode.
    pub action_mask: Vec<bool>,
    pub active_player: Option<PlayerId>,
    pub outcome: GameOutcome,
}

impl Observation {
    pub fn cell(&self, row: usize, col: usize) -> Option<i8> {
        if row < self.rows && col < self.cols {
            Some(self.board[row * self.cols + col])
        } else {
            None
        }
    }

    /// Indices of the `true` entries in the action mask.
    pub fn legal_actions(&self) -> Vec<usize> {
        self.action_mask
            .iter()
            .enumerate()
            .filter(|&(_, &legal)| legal)
            .map(|(action, _)| action)
            .collect()
    }
}

/// Derive the externally visible observation. Never mutates `state`.
pub fn observe(state: &TurnState) -> Observation {
    let board = state.board();
    Observation {
        rows: board.rows(),
        cols: board.cols(),
        board: board
            .iter()
            .map(|(_, cell)| match cell {
                Cell::Empty => EMPTY_CELL,
                Cell::Owner(player) => player.index() as i8,
            })
            .collect(),
        action_mask: state.legal_mask(),
        active_player: state.active_player(),
        outcome: state.outcome(),
    }
}

/// Encode a state as three flat `rows * cols` planes relative to `perspective`.
///
/// Plane 0: `perspective`'s pieces (1.0 where placed)
/// Plane 1: opponent's pieces (1.0 where placed)
/// Plane 2: cells a legal move would occupy (the landing row of each open
/// column in drop mode, every empty cell in direct mode)
pub fn encode_planes(state: &TurnState, perspective: PlayerId) -> Vec<f32> {
    let board = state.board();
    let area = board.rows() * board.cols();
    let mut data = vec![0.0f32; 3 * area];

    for (pos, cell) in board.iter() {
        let idx = pos.row * board.cols() + pos.col;
        match cell.owner() {
            Some(owner) if owner == perspective => data[idx] = 1.0,
            Some(_) => data[area + idx] = 1.0,
            None => {}
        }
    }

    if state.is_terminal() {
        return data;
    }

    let plane = 2 * area;
    match state.gravity() {
        GravityMode::DropToLowestOpenRow => {
            for col in 0..board.cols() {
                if let Some(row) = board.landing_row(col) {
                    data[plane + row * board.cols() + col] = 1.0;
                }
            }
        }
        GravityMode::DirectPlacement => {
            for (pos, cell) in board.iter() {
                if cell.is_empty() {
                    data[plane + pos.row * board.cols() + pos.col] = 1.0;
                }
            }
        }
    }

    data
}
