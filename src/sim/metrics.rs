use std::fmt;

use super::episode::EpisodeResult;
use crate::game::{GameOutcome, PlayerId, PlayerMap};

/// Aggregate counts over a set of finished episodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RolloutStats {
    pub episodes: usize,
    pub wins: PlayerMap<usize>,
    pub draws: usize,
    pub forfeits: usize,
    pub total_moves: usize,
    pub total_returns: PlayerMap<f64>,
}

impl RolloutStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &EpisodeResult) {
        self.episodes += 1;
        self.total_moves += result.length;
        match result.outcome {
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Forfeit(_) => self.forfeits += 1,
            GameOutcome::Win(_) | GameOutcome::InProgress => {}
        }
        if let Some(winner) = result.outcome.winner() {
            self.wins[winner] += 1;
        }
        for player in PlayerId::ALL {
            self.total_returns[player] += f64::from(result.returns[player]);
        }
    }

    /// Fold another worker's stats into this one.
    pub fn merge(&mut self, other: &RolloutStats) {
        self.episodes += other.episodes;
        self.draws += other.draws;
        self.forfeits += other.forfeits;
        self.total_moves += other.total_moves;
        for player in PlayerId::ALL {
            self.wins[player] += other.wins[player];
            self.total_returns[player] += other.total_returns[player];
        }
    }

    /// Share of episodes won by `player`, forfeits by the opponent included.
    pub fn win_rate(&self, player: PlayerId) -> f32 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.wins[player] as f32 / self.episodes as f32
    }

    pub fn draw_rate(&self) -> f32 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.draws as f32 / self.episodes as f32
    }

    /// Average number of pieces placed per episode.
    pub fn average_game_length(&self) -> f32 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.episodes as f32
    }

    pub fn average_return(&self, player: PlayerId) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.total_returns[player] / self.episodes as f64
    }
}

impl fmt::Display for RolloutStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "episodes: {} | first: {:.1}% | second: {:.1}% | draw: {:.1}% | forfeits: {} | avg_len: {:.1}",
            self.episodes,
            self.win_rate(PlayerId::First) * 100.0,
            self.win_rate(PlayerId::Second) * 100.0,
            self.draw_rate() * 100.0,
            self.forfeits,
            self.average_game_length(),
        )
    }
}
