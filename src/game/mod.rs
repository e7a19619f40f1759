//! Core rules engine: board representation, move application, line-based win
//! detection, the turn controller and observation building.

mod board;
mod engine;
pub mod line_scan;
pub mod moves;
mod observation;
mod player;
mod state;

pub use board::{Board, Cell, Position};
pub use engine::{Engine, InfoMap, RewardVector, StepResult};
pub use moves::{GravityMode, Move};
pub use observation::{encode_planes, observe, Observation, EMPTY_CELL};
pub use player::{PlayerId, PlayerMap};
pub use state::{GameOutcome, TurnState};
