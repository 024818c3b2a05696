use faan_core::{WinType, points_for, resolve_win};

use super::{find_seat, load_session, print_last_round, save_session};
use crate::store::KvStore;

/// Record a win for `winner` worth `faan`. Naming a discarder makes it a
/// discard win, otherwise the win is self-drawn.
pub fn run(store: &KvStore, winner: &str, faan: i32, from: Option<&str>) -> Result<(), String> {
    let state = load_session(store)?;

    let winner = find_seat(&state, winner)?;
    let discarder = from.map(|who| find_seat(&state, who)).transpose()?;
    let win_type = if discarder.is_some() {
        WinType::Discard
    } else {
        WinType::SelfDrawn
    };

    let points = points_for(faan, win_type).map_err(|e| e.to_string())?;
    let next = resolve_win(&state, winner, win_type, discarder, points, faan)
        .map_err(|e| e.to_string())?;

    save_session(store, &next)?;
    print_last_round(&next);
    Ok(())
}
