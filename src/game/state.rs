use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Board, Position};
use super::moves::{self, GravityMode};
use super::player::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Win(PlayerId),
    Draw,
    /// The named player attempted an illegal move and lost by forfeit.
    Forfeit(PlayerId),
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// The player credited with the win, if any. A forfeit counts as a win
    /// for the opponent.
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Forfeit(offender) => Some(offender.other()),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => f.write_str("in progress"),
            GameOutcome::Win(player) => write!(f, "{player} wins"),
            GameOutcome::Draw => f.write_str("draw"),
            GameOutcome::Forfeit(player) => write!(f, "{player} forfeits"),
        }
    }
}

/// The mutable state of one episode.
///
/// Only [`Engine`](super::Engine) produces new values; callers read it
/// through accessors and [`observe`](super::observe).
#[derive(Debug, Clone, PartialEq)]
pub struct TurnState {
    pub(super) board: Board,
    pub(super) gravity: GravityMode,
    pub(super) win_length: usize,
    pub(super) active: PlayerId,
    pub(super) outcome: GameOutcome,
    pub(super) move_count: usize,
    pub(super) last_move: Option<Position>,
}

impl TurnState {
    pub(super) fn new(
        rows: usize,
        cols: usize,
        gravity: GravityMode,
        win_length: usize,
        starting_player: PlayerId,
    ) -> Self {
        TurnState {
            board: Board::empty(rows, cols),
            gravity,
            win_length,
            active: starting_player,
            outcome: GameOutcome::InProgress,
            move_count: 0,
            last_move: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn gravity(&self) -> GravityMode {
        self.gravity
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// The player to move, or `None` once the game is over.
    pub fn active_player(&self) -> Option<PlayerId> {
        if self.is_terminal() {
            None
        } else {
            Some(self.active)
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Number of pieces placed so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Legal action ids; empty once the game is over.
    pub fn legal_actions(&self) -> Vec<usize> {
        self.legal_mask()
            .into_iter()
            .enumerate()
            .filter(|&(_, legal)| legal)
            .map(|(action, _)| action)
            .collect()
    }

    /// Legal-move mask over the action space; all `false` once the game is over.
    pub fn legal_mask(&self) -> Vec<bool> {
        if self.is_terminal() {
            return vec![false; moves::action_count(&self.board, self.gravity)];
        }
        moves::legal_mask(&self.board, self.gravity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = TurnState::new(6, 7, GravityMode::DropToLowestOpenRow, 4, PlayerId::First);
        assert_eq!(state.active_player(), Some(PlayerId::First));
        assert!(!state.is_terminal());
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.last_move(), None);
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_terminal_state_has_no_legal_actions() {
        let mut state = TurnState::new(3, 3, GravityMode::DirectPlacement, 3, PlayerId::Second);
        assert_eq!(state.legal_actions().len(), 9);
        state.outcome = GameOutcome::Draw;
        assert_eq!(state.active_player(), None);
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.legal_mask(), vec![false; 9]);
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(GameOutcome::Win(PlayerId::First).winner(), Some(PlayerId::First));
        assert_eq!(
            GameOutcome::Forfeit(PlayerId::First).winner(),
            Some(PlayerId::Second)
        );
        assert_eq!(GameOutcome::Draw.winner(), None);
        assert!(!GameOutcome::InProgress.is_terminal());
        assert_eq!(GameOutcome::Win(PlayerId::Second).to_string(), "Second wins");
    }
}
