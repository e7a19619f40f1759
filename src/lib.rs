//! # ML Connect-N
//!
//! A deterministic rules engine for two-player, turn-based line games
//! (Connect Four and Tic-Tac-Toe) with a two-agent step interface for
//! reinforcement-learning training loops.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, move application, line scanning, turn controller, observations
//! - [`sim`] — Random agents, episode loops and batched rollouts
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod sim;
