use super::load_session;
use crate::store::KvStore;

pub fn run(store: &KvStore, format: &str) -> Result<(), String> {
    let state = load_session(store)?;
    let history = state.history();

    let output = match format {
        "text" | "txt" => history.export_text(),
        "markdown" | "md" => history.export_markdown(),
        "json" => serde_json::to_string_pretty(history)
            .map_err(|e| format!("cannot encode history: {e}"))?,
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: text, markdown, json"
            ));
        }
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
