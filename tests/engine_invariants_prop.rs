//! Property tests for the step transition.
//!
//! Invariants covered:
//! - occupied cells always equal the move counter
//! - the active player strictly alternates after non-terminal steps
//! - failed steps and steps after termination never change the state
//! - a full board without a winner is always a draw
//! - win rewards are zero-sum, draw rewards equal the configured constant

use ml_connect_n::config::{GameConfig, StartingPlayer};
use ml_connect_n::game::{observe, Engine, GameOutcome, Move, PlayerId, Position, TurnState};
use proptest::prelude::*;

fn engine(config: GameConfig, seed: u64) -> Engine {
    Engine::new(GameConfig {
        starting_player: StartingPlayer::Random,
        random_seed: Some(seed),
        draw_reward: -0.5,
        move_shaping_reward: 0.25,
        ..config
    })
    .unwrap()
}

/// One scripted call: an action id (possibly out of range) and whether to
/// send it as the wrong player.
fn call() -> impl Strategy<Value = (usize, bool)> {
    (0usize..12, prop::bool::weighted(0.1))
}

fn check_rollout(mut engine: Engine, calls: &[(usize, bool)]) -> Result<(), TestCaseError> {
    let (mut state, _) = engine.reset();

    for &(action, wrong_player) in calls {
        let before: TurnState = state.clone();
        let player = match state.active_player() {
            Some(active) if wrong_player => active.other(),
            Some(active) => active,
            None => PlayerId::First,
        };
        let mv = engine.decode_action(action);

        match engine.step(&state, player, mv) {
            Err(_) => {
                prop_assert!(before.is_terminal() || wrong_player);
                prop_assert_eq!(&state, &before);
            }
            Ok((next, result)) => {
                prop_assert!(!before.is_terminal());
                prop_assert_eq!(next.board().occupied_count(), next.move_count());
                prop_assert_eq!(&result.observation, &observe(&next));

                match next.outcome() {
                    GameOutcome::InProgress => {
                        prop_assert_eq!(next.active_player(), Some(player.other()));
                        prop_assert_eq!(next.move_count(), before.move_count() + 1);
                        prop_assert!(!next.board().is_full());
                        prop_assert_eq!(result.rewards[player], 0.25);
                        prop_assert_eq!(result.rewards[player.other()], 0.0);
                    }
                    GameOutcome::Win(winner) => {
                        prop_assert_eq!(winner, player);
                        prop_assert_eq!(result.rewards[winner], -result.rewards[winner.other()]);
                        prop_assert!(result.rewards[winner] > 0.0);
                    }
                    GameOutcome::Draw => {
                        prop_assert!(next.board().is_full());
                        prop_assert_eq!(result.rewards[PlayerId::First], -0.5);
                        prop_assert_eq!(result.rewards[PlayerId::Second], -0.5);
                    }
                    GameOutcome::Forfeit(offender) => {
                        prop_assert_eq!(offender, player);
                        prop_assert_eq!(next.board(), before.board());
                        prop_assert!(result.rewards[offender] < 0.0);
                    }
                }
                prop_assert_eq!(result.is_terminal(), next.is_terminal());
                state = next;
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn tic_tac_toe_step_invariants(seed in any::<u64>(), calls in prop::collection::vec(call(), 0..20)) {
        check_rollout(engine(GameConfig::tic_tac_toe(), seed), &calls)?;
    }

    #[test]
    fn connect_four_step_invariants(seed in any::<u64>(), calls in prop::collection::vec(call(), 0..60)) {
        let calls: Vec<_> = calls.into_iter().map(|(a, w)| (a % 8, w)).collect();
        check_rollout(engine(GameConfig::connect_four(), seed), &calls)?;
    }

    #[test]
    fn legal_only_play_never_forfeits(seed in any::<u64>(), picks in prop::collection::vec(any::<prop::sample::Index>(), 42)) {
        let mut engine = engine(GameConfig::connect_four(), seed);
        let (mut state, mut obs) = engine.reset();
        for pick in picks {
            let Some(player) = state.active_player() else { break };
            let legal = obs.legal_actions();
            prop_assert!(!legal.is_empty());
            let action = legal[pick.index(legal.len())];
            let result = engine.step_in_place(&mut state, player, Move::Column(action)).unwrap();
            obs = result.observation;
        }
        prop_assert!(!matches!(state.outcome(), GameOutcome::Forfeit(_)));
        // 42 legal moves always end a 6x7 game
        prop_assert!(state.is_terminal());
    }

    #[test]
    fn direct_moves_land_where_aimed(row in 0usize..3, col in 0usize..3) {
        let mut engine = engine(GameConfig::tic_tac_toe(), 0);
        let (state, _) = engine.reset();
        let player = state.active_player().unwrap();
        let (next, _) = engine.step(&state, player, Move::Cell(Position::new(row, col))).unwrap();
        prop_assert_eq!(next.last_move(), Some(Position::new(row, col)));
    }
}
