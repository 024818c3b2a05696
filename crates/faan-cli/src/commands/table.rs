use comfy_table::{ContentArrangement, Table};

use faan_core::FAAN_TABLE;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Faan", "Self-drawn (each)", "Discard"]);
    table.add_row(vec!["0".to_string(), "0".to_string(), "0".to_string()]);
    for (faan, self_drawn, discard) in FAAN_TABLE {
        table.add_row(vec![
            faan.to_string(),
            self_drawn.to_string(),
            discard.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
