use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use faan_core::{GameState, SEATS, ScoringVariation};

use super::{SESSION_KEY, save_session};
use crate::store::KvStore;

pub struct NewArgs<'a> {
    pub names: &'a [String],
    pub variation: ScoringVariation,
    pub shuffle: bool,
    pub seed: Option<u64>,
    pub force: bool,
}

pub fn run(store: &KvStore, args: NewArgs<'_>) -> Result<(), String> {
    if !args.force && store.get::<serde_json::Value>(SESSION_KEY)?.is_some() {
        return Err(format!(
            "a session already exists in {}; use --force to replace it",
            store.path().display()
        ));
    }

    let mut names = seat_names(args.names)?;
    if args.shuffle {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        names.shuffle(&mut rng);
    }

    let state = GameState::new(names, args.variation);
    save_session(store, &state)?;
    tracing::info!(variation = %args.variation, "session started");

    println!(
        "Started a new session ({} {})",
        args.variation.glyph(),
        args.variation
    );
    for (seat, player) in state.players().iter().enumerate() {
        println!(
            "  {}. {:<12} {}",
            seat + 1,
            player.name,
            state.seat_wind(seat)
        );
    }
    Ok(())
}

/// Trim the given names and fill blanks with `Player N`.
fn seat_names(raw: &[String]) -> Result<[String; SEATS], String> {
    if raw.len() != SEATS {
        return Err(format!("expected {SEATS} player names, got {}", raw.len()));
    }
    Ok(std::array::from_fn(|seat| {
        let name = raw[seat].trim();
        if name.is_empty() {
            format!("Player {}", seat + 1)
        } else {
            name.to_string()
        }
    }))
}
