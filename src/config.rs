use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::GravityMode;

/// Largest board (rows times columns) a config may describe.
pub const MAX_BOARD_CELLS: usize = 1 << 16;

/// How [`Engine::reset`](crate::game::Engine::reset) picks who moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartingPlayer {
    First,
    Second,
    /// Uniformly at random from the engine's generator.
    Random,
    /// First on the first episode, then swapping every reset.
    Alternate,
}

/// Rules and reward constants for one game variant, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_rows: usize,
    pub board_columns: usize,
    pub win_length: usize,
    pub gravity_mode: GravityMode,
    /// Paid to the winner; the loser receives the negation.
    pub win_reward: f32,
    /// Paid to both players on a draw.
    pub draw_reward: f32,
    /// Paid to the mover after a legal, non-terminal move.
    pub move_shaping_reward: f32,
    /// Subtracted from a player who forfeits by playing an illegal move.
    pub illegal_move_penalty: f32,
    pub starting_player: StartingPlayer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::connect_four()
    }
}

impl GameConfig {
    /// 6x7 board, four in a row, pieces drop to the lowest open row.
    pub fn connect_four() -> Self {
        GameConfig {
            board_rows: 6,
            board_columns: 7,
            win_length: 4,
            gravity_mode: GravityMode::DropToLowestOpenRow,
            win_reward: 1.0,
            draw_reward: 0.0,
            move_shaping_reward: 0.0,
            illegal_move_penalty: 1.0,
            starting_player: StartingPlayer::Random,
            random_seed: None,
        }
    }

    /// 3x3 board, three in a row, pieces placed on any empty cell.
    pub fn tic_tac_toe() -> Self {
        GameConfig {
            board_rows: 3,
            board_columns: 3,
            win_length: 3,
            gravity_mode: GravityMode::DirectPlacement,
            starting_player: StartingPlayer::First,
            ..GameConfig::connect_four()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_rows == 0 {
            return Err(ConfigError::Invalid("board_rows must be >= 1".into()));
        }
        if self.board_columns == 0 {
            return Err(ConfigError::Invalid("board_columns must be >= 1".into()));
        }
        match self.board_rows.checked_mul(self.board_columns) {
            Some(cells) if cells <= MAX_BOARD_CELLS => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "board {}x{} exceeds {MAX_BOARD_CELLS} cells",
                    self.board_rows, self.board_columns
                )));
            }
        }
        if self.win_length == 0 {
            return Err(ConfigError::Invalid("win_length must be >= 1".into()));
        }
        if self.win_length > self.board_rows.max(self.board_columns) {
            return Err(ConfigError::Invalid(format!(
                "win_length {} exceeds both board dimensions ({}x{})",
                self.win_length, self.board_rows, self.board_columns
            )));
        }

        let rewards = [
            ("win_reward", self.win_reward),
            ("draw_reward", self.draw_reward),
            ("move_shaping_reward", self.move_shaping_reward),
            ("illegal_move_penalty", self.illegal_move_penalty),
        ];
        for (name, value) in rewards {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }
        if self.win_reward <= 0.0 {
            return Err(ConfigError::Invalid("win_reward must be > 0".into()));
        }
        if self.illegal_move_penalty < 0.0 {
            return Err(ConfigError::Invalid(
                "illegal_move_penalty must be >= 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all values (useful for creating example
    /// config files).
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
