//! Turn controller: episode reset, step transitions and reward assignment.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

use super::line_scan;
use super::moves::{self, Move};
use super::observation::{observe, Observation};
use super::player::{PlayerId, PlayerMap};
use super::state::{GameOutcome, TurnState};
use crate::config::{GameConfig, StartingPlayer};
use crate::error::{ConfigError, StepError};

/// Per-player rewards for a single step.
pub type RewardVector = PlayerMap<f32>;

/// Diagnostic key/value bag attached to every step. Consumers may ignore it.
pub type InfoMap = BTreeMap<String, Value>;

/// Everything a collaborator receives back from a successful step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub observation: Observation,
    pub rewards: RewardVector,
    pub terminations: PlayerMap<bool>,
    pub info: InfoMap,
}

impl StepResult {
    /// True when the episode ended for every player.
    pub fn is_terminal(&self) -> bool {
        self.terminations.iter().all(|(_, &done)| done)
    }
}

/// Owns the rules configuration and the randomness source, and drives
/// [`TurnState`] transitions.
///
/// The engine holds no per-episode state beyond the starting-player rotation,
/// so one engine can drive any number of independent episodes.
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    config: GameConfig,
    rng: R,
    next_starter: PlayerId,
}

impl Engine<StdRng> {
    /// Build an engine seeded from `config.random_seed`, or from OS entropy
    /// when no seed is configured.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Engine::with_rng(config, rng)
    }
}

impl<R: Rng> Engine<R> {
    /// Build an engine around an injected generator.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Engine {
            config,
            rng,
            next_starter: PlayerId::First,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Decode a flat action id for this engine's board.
    pub fn decode_action(&self, action: usize) -> Move {
        Move::from_action(self.config.gravity_mode, self.config.board_columns, action)
    }

    /// Start a new episode with an empty board.
    pub fn reset(&mut self) -> (TurnState, Observation) {
        let starter = self.pick_starter();
        tracing::debug!(
            starter = %starter,
            rows = self.config.board_rows,
            cols = self.config.board_columns,
            win_length = self.config.win_length,
            "reset"
        );

        let state = TurnState::new(
            self.config.board_rows,
            self.config.board_columns,
            self.config.gravity_mode,
            self.config.win_length,
            starter,
        );
        let observation = observe(&state);
        (state, observation)
    }

    fn pick_starter(&mut self) -> PlayerId {
        match self.config.starting_player {
            StartingPlayer::First => PlayerId::First,
            StartingPlayer::Second => PlayerId::Second,
            StartingPlayer::Random => {
                if self.rng.random_bool(0.5) {
                    PlayerId::First
                } else {
                    PlayerId::Second
                }
            }
            StartingPlayer::Alternate => {
                let starter = self.next_starter;
                self.next_starter = starter.other();
                starter
            }
        }
    }

    /// Apply `mv` for `player` and return the successor state.
    ///
    /// An illegal move is not an error: it ends the episode as a forfeit for
    /// `player`. Errors are returned only for moves out of turn or after the
    /// game has ended, and `state` is never modified.
    pub fn step(
        &self,
        state: &TurnState,
        player: PlayerId,
        mv: Move,
    ) -> Result<(TurnState, StepResult), StepError> {
        if state.is_terminal() {
            return Err(StepError::GameAlreadyOver(state.outcome()));
        }
        if player != state.active {
            return Err(StepError::OutOfTurn {
                expected: state.active,
                actual: player,
            });
        }

        let mut next = state.clone();
        let opponent = player.other();
        let mut rewards = RewardVector::splat(0.0);
        let mut info = InfoMap::new();

        match moves::apply(&mut next.board, next.gravity, player, mv) {
            Err(err) => {
                tracing::warn!(player = %player, ?mv, error = %err, "illegal move, forfeiting");
                next.outcome = GameOutcome::Forfeit(player);
                rewards[player] = -self.config.illegal_move_penalty;
                info.insert("illegal_move".into(), json!(err.to_string()));
            }
            Ok(landing) => {
                next.move_count += 1;
                next.last_move = Some(landing);
                info.insert("landing".into(), json!([landing.row, landing.col]));

                if let Some(line) =
                    line_scan::winning_line(&next.board, landing, player, next.win_length)
                {
                    next.outcome = GameOutcome::Win(player);
                    rewards[player] = self.config.win_reward;
                    rewards[opponent] = -self.config.win_reward;
                    let cells: Vec<[usize; 2]> =
                        line.iter().map(|pos| [pos.row, pos.col]).collect();
                    info.insert("winning_line".into(), json!(cells));
                } else if next.board.is_full() {
                    next.outcome = GameOutcome::Draw;
                    rewards = RewardVector::splat(self.config.draw_reward);
                } else {
                    next.active = opponent;
                    rewards[player] = self.config.move_shaping_reward;
                }
            }
        }
        info.insert("move_count".into(), json!(next.move_count));

        tracing::debug!(
            player = %player,
            ?mv,
            move_count = next.move_count,
            outcome = %next.outcome,
            "step"
        );

        let terminations = PlayerMap::splat(next.is_terminal());
        let result = StepResult {
            observation: observe(&next),
            rewards,
            terminations,
            info,
        };
        Ok((next, result))
    }

    /// Like [`Engine::step`], but replaces `state` in place on success.
    pub fn step_in_place(
        &self,
        state: &mut TurnState,
        player: PlayerId,
        mv: Move,
    ) -> Result<StepResult, StepError> {
        let (next, result) = self.step(state, player, mv)?;
        *state = next;
        Ok(result)
    }
}
