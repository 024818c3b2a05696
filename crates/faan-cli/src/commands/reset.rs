use super::SESSION_KEY;
use crate::store::KvStore;

pub fn run(store: &KvStore) -> Result<(), String> {
    if store.remove(SESSION_KEY)? {
        tracing::info!(path = %store.path().display(), "session cleared");
        println!("Session cleared.");
    } else {
        println!("No session to clear.");
    }
    Ok(())
}
