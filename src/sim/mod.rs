//! Reference driver for the engine: simple agents, episode loops and rollout
//! statistics, including batched episodes across worker threads.

mod agent;
pub mod episode;
pub mod metrics;
mod random;

pub use agent::Agent;
pub use episode::{episode_seed, play_episode, run_batch, EpisodeResult};
pub use metrics::RolloutStats;
pub use random::RandomAgent;
