pub mod dice;
pub mod history;
pub mod new;
pub mod reset;
pub mod status;
pub mod table;
pub mod tie;
pub mod win;

use colored::Colorize;
use faan_core::{GameState, history::signed};

use crate::store::KvStore;

/// Store key the running session lives under.
pub const SESSION_KEY: &str = "mahjong_game";

/// Load the running session and check it before use.
fn load_session(store: &KvStore) -> Result<GameState, String> {
    let state: GameState = store.get(SESSION_KEY)?.ok_or_else(|| {
        format!(
            "no session in {}; start one with `faan new`",
            store.path().display()
        )
    })?;
    state.validate().map_err(|e| e.to_string())?;
    Ok(state)
}

fn save_session(store: &KvStore, state: &GameState) -> Result<(), String> {
    store.set(SESSION_KEY, state)
}

/// Resolve a seat from a 1-based seat number or a player name.
///
/// `1` to `4` always mean seats. Any other input, numeric or not, is looked
/// up as a name.
fn find_seat(state: &GameState, who: &str) -> Result<usize, String> {
    let who = who.trim();
    if let Ok(n @ 1..=4) = who.parse::<usize>() {
        return Ok(n - 1);
    }
    state.seat_of(who).ok_or_else(|| match who.parse::<usize>() {
        Ok(n) => format!("seat {n} does not exist (use 1-4) and no player has that name"),
        Err(_) => format!("no player named \"{who}\""),
    })
}

/// Print the most recent ledger entry and where the deal goes next.
fn print_last_round(state: &GameState) {
    let Some(record) = state.history().last() else {
        return;
    };
    println!("  Game {}: {}", record.game, record.describe().bold());
    for c in &record.changes {
        let change = signed(c.change);
        let change = if c.change.is_positive() {
            change.green()
        } else if c.change.is_negative() {
            change.red()
        } else {
            change.normal()
        };
        println!("    {:<12} {}", c.name, change);
    }
    let dealer = state.dealer_index();
    let wind = state.prevailing_wind();
    println!(
        "  Next: game {}, {} {} round, {} deals",
        state.round_number(),
        wind.glyph(),
        wind,
        state.players()[dealer].name
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use faan_core::ScoringVariation;

    #[test]
    fn seat_by_number_or_name() {
        let state = GameState::new(["Ann", "Bea", "Cal", "Dov"], ScoringVariation::Full);
        assert_eq!(find_seat(&state, "1"), Ok(0));
        assert_eq!(find_seat(&state, "4"), Ok(3));
        assert_eq!(find_seat(&state, "cal"), Ok(2));
        assert!(find_seat(&state, "5").is_err());
        assert!(find_seat(&state, "0").is_err());
        assert!(find_seat(&state, "Eve").is_err());
    }

    #[test]
    fn numeric_names_outside_seat_range() {
        let state = GameState::new(["Ann", "10", "2", "Dov"], ScoringVariation::Full);
        assert_eq!(find_seat(&state, "10"), Ok(1));
        assert_eq!(find_seat(&state, "2"), Ok(1));
        let err = find_seat(&state, "7").unwrap_err();
        assert!(err.contains("seat 7 does not exist"));
    }
}
