use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use crate::game::Observation;

/// An agent that selects uniformly at random from legal actions.
///
/// With a non-zero `illegal_rate` it instead picks from the whole action
/// space on that fraction of turns, which exercises the forfeit path.
pub struct RandomAgent {
    rng: StdRng,
    illegal_rate: f64,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
            illegal_rate: 0.0,
        }
    }

    pub fn with_illegal_rate(seed: u64, illegal_rate: f64) -> Self {
        RandomAgent {
            illegal_rate: illegal_rate.clamp(0.0, 1.0),
            ..RandomAgent::new(seed)
        }
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, observation: &Observation) -> usize {
        let actions = observation.legal_actions();
        let unconstrained = self.illegal_rate > 0.0 && self.rng.random_bool(self.illegal_rate);
        if actions.is_empty() || unconstrained {
            return self.rng.random_range(0..observation.action_mask.len().max(1));
        }
        actions[self.rng.random_range(0..actions.len())]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::{Engine, PlayerId};

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new(11);
        let mut engine = Engine::new(GameConfig::tic_tac_toe()).unwrap();
        let (state, _) = engine.reset();
        let (_, result) = engine
            .step(&state, PlayerId::First, engine.decode_action(4))
            .unwrap();
        let legal = result.observation.legal_actions();

        for _ in 0..100 {
            let action = agent.select_action(&result.observation);
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let mut engine = Engine::new(GameConfig::connect_four()).unwrap();
        let (_, obs) = engine.reset();
        let mut a = RandomAgent::new(5);
        let mut b = RandomAgent::new(5);
        for _ in 0..20 {
            assert_eq!(a.select_action(&obs), b.select_action(&obs));
        }
    }

    #[test]
    fn test_illegal_rate_stays_in_action_space() {
        let mut agent = RandomAgent::with_illegal_rate(2, 1.0);
        let mut engine = Engine::new(GameConfig::connect_four()).unwrap();
        let (_, obs) = engine.reset();
        for _ in 0..50 {
            assert!(agent.select_action(&obs) < 7);
        }
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new(0);
        assert_eq!(agent.name(), "Random");
    }
}
