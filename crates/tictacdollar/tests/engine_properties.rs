//! Property tests for the engine's accounting and rejection rules.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictacdollar::{
    ContestantSetup, Difficulty, GameMode, InvariantSet, MatchInvariants, MatchSetup, MatchState,
    Position, Tuning,
};

fn new_match(seed: u64, difficulty: Difficulty) -> MatchState {
    let setup = MatchSetup::new(
        ContestantSetup::new("Dog", "D"),
        ContestantSetup::new("Cat", "C"),
        difficulty,
        GameMode::HumanVsHuman,
    );
    MatchState::new(setup, Tuning::standard(), &mut StdRng::seed_from_u64(seed))
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

proptest! {
    #[test]
    fn occupied_cells_are_rejected_unchanged(
        seed in any::<u64>(),
        cells in prop::collection::vec(0usize..25, 1..40),
    ) {
        let mut state = new_match(seed, Difficulty::Easy);
        for index in cells {
            let position = Position::from_index(index).unwrap();
            if !state.board().is_empty(position) {
                let again = state.clone().apply_move(position);
                prop_assert_eq!(&again, &state);
            } else {
                state = state.apply_move(position);
            }
        }
    }

    #[test]
    fn every_move_costs_one_or_nets_the_reward(
        seed in any::<u64>(),
        level in difficulty(),
        cells in prop::collection::vec(0usize..25, 1..80),
    ) {
        let mut state = new_match(seed, level);
        for index in cells {
            let position = Position::from_index(index).unwrap();
            let mover = state.to_move();
            let before = state.contestant(mover).purse().balance();
            match state.play(position) {
                Ok(report) => {
                    let after = report.state().contestant(mover).purse().balance();
                    let expected = if report.scored() { before + 4 } else { before - 1 };
                    prop_assert_eq!(after, expected);
                    prop_assert!(MatchInvariants::check_all(report.state()).is_ok());
                    state = report.into_state();
                }
                Err(_) => {
                    let again = state.clone().apply_move(position);
                    prop_assert_eq!(again, state.clone());
                }
            }
        }
    }

    #[test]
    fn board_never_stays_full(
        seed in any::<u64>(),
        cells in prop::collection::vec(0usize..25, 25..120),
    ) {
        let mut state = new_match(seed, Difficulty::Easy);
        for index in cells {
            state = state.apply_move(Position::from_index(index).unwrap());
            prop_assert!(state.board().occupied() < 25);
        }
    }
}
