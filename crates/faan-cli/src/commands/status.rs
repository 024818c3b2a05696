use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::load_session;
use crate::store::KvStore;

pub fn run(store: &KvStore) -> Result<(), String> {
    let state = load_session(store)?;
    let wind = state.prevailing_wind();
    let variation = state.scoring_variation();

    let header = format!(
        "Game {}  ·  {} {}  ·  {} {}",
        state.round_number(),
        wind.glyph(),
        wind,
        variation.glyph(),
        variation
    );
    println!("  {}", header.bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Seat", "Player", "Wind", "Score", ""]);

    for (seat, player) in state.players().iter().enumerate() {
        let wind = state.seat_wind(seat);
        let mut marks = Vec::new();
        if seat == state.dealer_index() {
            marks.push("dealer");
        }
        if seat == state.starting_dealer_index() {
            marks.push("started");
        }
        table.add_row(vec![
            (seat + 1).to_string(),
            player.name.clone(),
            format!("{} {}", wind.glyph(), wind),
            player.score.to_string(),
            marks.join(", "),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} rounds played, {} of 4 deals this wind",
        state.history().len(),
        state.dealer_rotations()
    );

    Ok(())
}
