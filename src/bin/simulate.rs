use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use ml_connect_n::config::GameConfig;
use ml_connect_n::game::{Engine, PlayerId, PlayerMap};
use ml_connect_n::sim::{self, Agent, RandomAgent};

/// Run random self-play episodes through the rules engine.
#[derive(Parser)]
#[command(name = "simulate", about = "Simulate Connect Four / Tic-Tac-Toe episodes")]
struct Cli {
    /// Game preset: connect-four or tic-tac-toe
    #[arg(long, default_value = "connect-four")]
    game: String,

    /// Path to a TOML configuration file (overrides the preset)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of episodes to simulate
    #[arg(long, default_value_t = 1000)]
    episodes: usize,

    /// Base seed for the batch
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Worker threads
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Fraction of turns on which agents ignore the legal-move mask
    #[arg(long, default_value_t = 0.0)]
    illegal_rate: f64,

    /// Play one extra episode and print its final board
    #[arg(long)]
    show_board: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match (&cli.config, cli.game.as_str()) {
        (Some(path), _) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        (None, "connect-four") => GameConfig::connect_four(),
        (None, "tic-tac-toe") => GameConfig::tic_tac_toe(),
        (None, other) => bail!(
            "unknown game '{}' (expected 'connect-four' or 'tic-tac-toe')",
            other
        ),
    };

    if cli.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if cli.show_board {
        show_one_episode(&config, cli.seed)?;
    }

    let stats = sim::run_batch(&config, cli.episodes, cli.seed, cli.threads, cli.illegal_rate)
        .context("running simulation batch")?;
    println!("{stats}");
    Ok(())
}

fn show_one_episode(config: &GameConfig, seed: u64) -> Result<()> {
    let mut engine = Engine::with_rng(config.clone(), StdRng::seed_from_u64(seed))?;
    let mut first = RandomAgent::new(seed.wrapping_add(1));
    let mut second = RandomAgent::new(seed.wrapping_add(2));
    let mut agents: PlayerMap<&mut dyn Agent> = PlayerMap::new(&mut first, &mut second);

    let (result, state) = sim::play_episode(&mut engine, &mut agents)?;
    print!("{}", state.board());
    println!(
        "{} after {} moves (returns: {:+.1} / {:+.1})",
        result.outcome,
        result.length,
        result.returns[PlayerId::First],
        result.returns[PlayerId::Second],
    );
    println!("-------------------------------------------");
    Ok(())
}
