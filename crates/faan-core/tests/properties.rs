//! Property tests for the round resolver and seat winds.
//!
//! Increase cases locally with: PROPTEST_CASES=1000 cargo test -p faan-core

use std::env;

use faan_core::{
    GameState, MAX_FAAN, Score, ScoreError, ScoringVariation, WinType, Wind, points_for,
    resolve_tie, resolve_win, seat_wind,
};
use proptest::prelude::*;

fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

#[derive(Debug, Clone)]
enum Round {
    Tie,
    SelfDrawn { winner: usize, faan: i32 },
    Discard { winner: usize, offset: usize, faan: i32 },
}

fn round() -> impl Strategy<Value = Round> {
    prop_oneof![
        Just(Round::Tie),
        (0..4usize, 0..=MAX_FAAN).prop_map(|(winner, faan)| Round::SelfDrawn { winner, faan }),
        (0..4usize, 1..4usize, 0..=MAX_FAAN).prop_map(|(winner, offset, faan)| Round::Discard {
            winner,
            offset,
            faan
        }),
    ]
}

fn variation() -> impl Strategy<Value = ScoringVariation> {
    prop_oneof![Just(ScoringVariation::Full), Just(ScoringVariation::Half)]
}

fn apply(state: &GameState, round: &Round) -> GameState {
    match *round {
        Round::Tie => resolve_tie(state),
        Round::SelfDrawn { winner, faan } => {
            let points = points_for(faan, WinType::SelfDrawn).unwrap();
            resolve_win(state, winner, WinType::SelfDrawn, None, points, faan).unwrap()
        }
        Round::Discard {
            winner,
            offset,
            faan,
        } => {
            let points = points_for(faan, WinType::Discard).unwrap();
            let discarder = (winner + offset) % 4;
            resolve_win(state, winner, WinType::Discard, Some(discarder), points, faan).unwrap()
        }
    }
}

fn fresh(variation: ScoringVariation) -> GameState {
    GameState::new(["East", "South", "West", "North"], variation)
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn every_round_is_zero_sum(
        variation in variation(),
        rounds in prop::collection::vec(round(), 0..40),
    ) {
        let mut state = fresh(variation);
        for r in &rounds {
            state = apply(&state, r);
            prop_assert_eq!(state.total_score(), Score::ZERO);
            prop_assert_eq!(state.history().len() as u32, state.round_number() - 1);
            prop_assert!(state.dealer_rotations() < 4);
            prop_assert!(state.validate().is_ok());
        }
    }

    #[test]
    fn half_gun_with_any_points_is_exact(
        winner in 0..4usize,
        offset in 1..4usize,
        points in 0u32..5000,
    ) {
        let state = fresh(ScoringVariation::Half);
        let discarder = (winner + offset) % 4;
        let next = resolve_win(&state, winner, WinType::Discard, Some(discarder), points, 1).unwrap();
        prop_assert_eq!(next.total_score(), Score::ZERO);
        prop_assert_eq!(next.players()[winner].score, Score::from_points(i64::from(points)));
    }

    #[test]
    fn seat_winds_are_a_permutation(dealer in 0..4usize) {
        let mut winds: Vec<usize> = (0..4).map(|seat| seat_wind(seat, dealer).index()).collect();
        prop_assert_eq!(seat_wind(dealer, dealer), Wind::East);
        winds.sort_unstable();
        prop_assert_eq!(winds, vec![0, 1, 2, 3]);
    }

    #[test]
    fn dealer_win_keeps_the_deal(
        rounds in prop::collection::vec(round(), 0..12),
        faan in 0..=MAX_FAAN,
        discard in any::<bool>(),
    ) {
        let mut state = fresh(ScoringVariation::Full);
        for r in &rounds {
            state = apply(&state, r);
        }
        let dealer = state.dealer_index();
        let before = state.rotation();
        let next = if discard {
            let points = points_for(faan, WinType::Discard).unwrap();
            resolve_win(&state, dealer, WinType::Discard, Some((dealer + 1) % 4), points, faan).unwrap()
        } else {
            let points = points_for(faan, WinType::SelfDrawn).unwrap();
            resolve_win(&state, dealer, WinType::SelfDrawn, None, points, faan).unwrap()
        };
        prop_assert_eq!(next.rotation(), before);
        prop_assert_eq!(next.round_number(), state.round_number() + 1);
    }

    #[test]
    fn four_passes_advance_the_wind_once(
        rounds in prop::collection::vec(round(), 0..12),
        winners in prop::collection::vec(prop::option::of(1..4usize), 4),
    ) {
        let mut state = fresh(ScoringVariation::Full);
        for r in &rounds {
            state = apply(&state, r);
        }
        // Bring the pass count back to zero before measuring.
        while state.dealer_rotations() != 0 {
            state = resolve_tie(&state);
        }
        let start_wind = state.prevailing_wind();
        let start_dealer = state.dealer_index();

        for w in &winners {
            state = match w {
                None => resolve_tie(&state),
                Some(offset) => {
                    let winner = (state.dealer_index() + offset) % 4;
                    resolve_win(&state, winner, WinType::SelfDrawn, None, 2, 1).unwrap()
                }
            };
        }
        prop_assert_eq!(state.prevailing_wind(), start_wind.next());
        prop_assert_eq!(state.dealer_rotations(), 0);
        prop_assert_eq!(state.dealer_index(), start_dealer);
    }

    #[test]
    fn table_discard_doubles_self_drawn(faan in 1..=MAX_FAAN) {
        let self_drawn = points_for(faan, WinType::SelfDrawn).unwrap();
        let discard = points_for(faan, WinType::Discard).unwrap();
        prop_assert!(self_drawn > 0);
        prop_assert_eq!(discard, self_drawn * 2);
    }

    #[test]
    fn out_of_range_faan_is_rejected(faan in prop_oneof![i32::MIN..0, (MAX_FAAN + 1)..i32::MAX]) {
        prop_assert_eq!(points_for(faan, WinType::SelfDrawn), Err(ScoreError::InvalidFaan(faan)));
        prop_assert_eq!(points_for(faan, WinType::Discard), Err(ScoreError::InvalidFaan(faan)));
    }
}
