//! Applying round outcomes to a game state.
//!
//! Both entry points take the current snapshot by reference and return a new
//! one. On error nothing is returned, so a caller never sees a partially
//! applied round.

use crate::error::{ScoreError, ScoreResult};
use crate::history::{RoundKind, RoundRecord, ScoreChange};
use crate::score::Score;
use crate::state::{GameState, SEATS, ScoringVariation};
use crate::table::WinType;

/// Apply a win to `state`.
///
/// `points` is the pre-resolved value, normally `points_for(faan, win_type)`;
/// `faan` is only kept for the ledger. A discard win needs a `discarder`
/// other than the winner, a self-drawn win must not name one. The dealer
/// keeps the deal when they win.
pub fn resolve_win(
    state: &GameState,
    winner: usize,
    win_type: WinType,
    discarder: Option<usize>,
    points: u32,
    faan: i32,
) -> ScoreResult<GameState> {
    if winner >= SEATS {
        return Err(ScoreError::InvalidWinner(winner));
    }
    check_discarder(winner, win_type, discarder)?;

    let deltas = payout(state.scoring_variation, winner, win_type, discarder, points);

    let mut next = state.clone();
    for &(seat, change) in &deltas {
        next.players[seat].score += change;
    }

    let record = RoundRecord {
        game: next.round_number,
        winner: Some(next.players[winner].name.clone()),
        win_type: win_type.into(),
        discarder: discarder.map(|seat| next.players[seat].name.clone()),
        faans: Some(faan),
        points,
        changes: deltas
            .iter()
            .map(|&(seat, change)| ScoreChange {
                name: next.players[seat].name.clone(),
                change,
            })
            .collect(),
    };
    next.history.append(record);

    let dealer_stays = winner == next.rotation.dealer_index;
    if !dealer_stays {
        next.rotation = next.rotation.advance();
    }
    next.round_number += 1;

    tracing::debug!(
        game = state.round_number,
        winner,
        %win_type,
        points,
        dealer_stays,
        dealer = next.rotation.dealer_index,
        wind = %next.rotation.prevailing_wind,
        "resolved win"
    );

    Ok(next)
}

/// Apply a drawn round to `state`. Scores are untouched and the deal always
/// passes on.
pub fn resolve_tie(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.history.append(RoundRecord {
        game: next.round_number,
        winner: None,
        win_type: RoundKind::Tie,
        discarder: None,
        faans: None,
        points: 0,
        changes: Vec::new(),
    });
    next.rotation = next.rotation.advance();
    next.round_number += 1;

    tracing::debug!(
        game = state.round_number,
        dealer = next.rotation.dealer_index,
        wind = %next.rotation.prevailing_wind,
        "resolved tie"
    );

    next
}

fn check_discarder(winner: usize, win_type: WinType, discarder: Option<usize>) -> ScoreResult<()> {
    match (win_type, discarder) {
        (WinType::SelfDrawn, None) => Ok(()),
        (WinType::SelfDrawn, Some(seat)) => Err(ScoreError::InvalidDiscarder(format!(
            "seat {seat} given for a self-drawn win"
        ))),
        (WinType::Discard, None) => Err(ScoreError::InvalidDiscarder(
            "a discard win needs a discarder".to_string(),
        )),
        (WinType::Discard, Some(seat)) if seat >= SEATS => Err(ScoreError::InvalidDiscarder(
            format!("seat {seat} must be between 0 and 3"),
        )),
        (WinType::Discard, Some(seat)) if seat == winner => Err(ScoreError::InvalidDiscarder(
            format!("seat {seat} cannot discard to itself"),
        )),
        (WinType::Discard, Some(_)) => Ok(()),
    }
}

/// Per-seat score changes for a validated win, in the order the ledger lists
/// them. A discard win without a discarder pays nothing.
fn payout(
    variation: ScoringVariation,
    winner: usize,
    win_type: WinType,
    discarder: Option<usize>,
    points: u32,
) -> Vec<(usize, Score)> {
    let points = Score::from_points(i64::from(points));
    match (win_type, variation, discarder) {
        (WinType::Discard, ScoringVariation::Full, Some(discarder)) => {
            vec![(winner, points), (discarder, -points)]
        }
        (WinType::Discard, ScoringVariation::Half, Some(discarder)) => (0..SEATS)
            .map(|seat| {
                let change = if seat == winner {
                    points
                } else if seat == discarder {
                    -points.half()
                } else {
                    -points.quarter()
                };
                (seat, change)
            })
            .collect(),
        (WinType::Discard, _, None) => Vec::new(),
        (WinType::SelfDrawn, _, _) => (0..SEATS)
            .map(|seat| {
                let change = if seat == winner {
                    Score::from_quarters(points.quarters() * 3)
                } else {
                    -points
                };
                (seat, change)
            })
            .collect(),
    }
}
