use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use super::metrics::RolloutStats;
use super::random::RandomAgent;
use crate::config::{GameConfig, StartingPlayer};
use crate::error::SimError;
use crate::game::{Engine, GameOutcome, PlayerMap, TurnState};

/// Result of playing a single episode.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeResult {
    pub outcome: GameOutcome,
    /// Pieces placed; a forfeiting move is not counted.
    pub length: usize,
    /// Sum of step rewards per player.
    pub returns: PlayerMap<f32>,
}

/// Play one episode from a fresh reset, returning the result and final state.
pub fn play_episode<R: Rng>(
    engine: &mut Engine<R>,
    agents: &mut PlayerMap<&mut dyn Agent>,
) -> Result<(EpisodeResult, TurnState), SimError> {
    let (mut state, mut observation) = engine.reset();
    let mut returns = PlayerMap::splat(0.0f32);

    // Every accepted step either places a piece or ends the game.
    while let Some(player) = state.active_player() {
        let action = agents[player].select_action(&observation);
        let mv = engine.decode_action(action);
        let step = engine.step_in_place(&mut state, player, mv)?;
        for (p, reward) in step.rewards.iter() {
            returns[p] += *reward;
        }
        observation = step.observation;
    }

    let result = EpisodeResult {
        outcome: state.outcome(),
        length: state.move_count(),
        returns,
    };
    Ok((result, state))
}

/// Seed for episode `episode_index` of a batch started from `base_seed`.
///
/// Forks the base seed by a golden-ratio stride and finalizes with the
/// SplitMix64 mixer, so neighbouring indices get unrelated agent streams.
pub fn episode_seed(base_seed: u64, episode_index: usize) -> u64 {
    let stride = (episode_index as u64).wrapping_add(1);
    let mut z = base_seed.wrapping_add(stride.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Play one random-vs-random episode with every source of randomness derived
/// from `seed`.
fn play_seeded_episode(
    config: &GameConfig,
    episode_index: usize,
    seed: u64,
    illegal_rate: f64,
) -> Result<EpisodeResult, SimError> {
    let mut config = config.clone();
    // Each episode gets a fresh engine, so alternation is keyed on the index.
    if config.starting_player == StartingPlayer::Alternate {
        config.starting_player = if episode_index % 2 == 0 {
            StartingPlayer::First
        } else {
            StartingPlayer::Second
        };
    }

    let mut engine = Engine::with_rng(config, StdRng::seed_from_u64(seed))?;
    let mut first = RandomAgent::with_illegal_rate(seed.wrapping_add(1), illegal_rate);
    let mut second = RandomAgent::with_illegal_rate(seed.wrapping_add(2), illegal_rate);
    let mut agents: PlayerMap<&mut dyn Agent> = PlayerMap::new(&mut first, &mut second);

    let (result, _) = play_episode(&mut engine, &mut agents)?;
    Ok(result)
}

/// Run `episodes` independent random-vs-random episodes on up to `threads`
/// worker threads. Results depend only on `base_seed`, not on the thread count.
pub fn run_batch(
    config: &GameConfig,
    episodes: usize,
    base_seed: u64,
    threads: usize,
    illegal_rate: f64,
) -> Result<RolloutStats, SimError> {
    config.validate()?;
    let threads = threads.clamp(1, episodes.max(1));
    let chunk = episodes.div_ceil(threads);

    let partials: Vec<Result<RolloutStats, SimError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|worker| {
                let start = worker * chunk;
                let end = (start + chunk).min(episodes);
                scope.spawn(move || -> Result<RolloutStats, SimError> {
                    let mut stats = RolloutStats::new();
                    for idx in start..end {
                        let seed = episode_seed(base_seed, idx);
                        let result = play_seeded_episode(config, idx, seed, illegal_rate)?;
                        stats.record(&result);
                    }
                    let episodes = end.saturating_sub(start);
                    tracing::debug!(worker, episodes, "worker finished");
                    Ok(stats)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(Err(SimError::WorkerPanicked)))
            .collect()
    });

    let mut total = RolloutStats::new();
    for partial in partials {
        total.merge(&partial?);
    }
    Ok(total)
}
