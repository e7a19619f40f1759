use std::path::PathBuf;

use crate::game::{GameOutcome, PlayerId};

/// Errors raised by direct board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// A move that cannot be applied to the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {column} is out of range (board has {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) is out of range")]
    OutOfRange { row: usize, col: usize },

    #[error("move kind does not match the board's placement mode")]
    WrongMoveKind,
}

impl From<BoardError> for IllegalMoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::CellOccupied { row, col } => IllegalMoveError::CellOccupied { row, col },
            BoardError::OutOfRange { row, col, .. } => IllegalMoveError::OutOfRange { row, col },
        }
    }
}

/// Errors returned by [`Engine::step`](crate::game::Engine::step). The turn
/// state is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum StepError {
    #[error("it is {expected}'s turn, not {actual}'s")]
    OutOfTurn { expected: PlayerId, actual: PlayerId },

    #[error("game is already over ({0})")]
    GameAlreadyOver(GameOutcome),
}

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Errors that can occur while running simulated episodes.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("step rejected: {0}")]
    Step(#[from] StepError),

    #[error("simulation worker panicked")]
    WorkerPanicked,
}
