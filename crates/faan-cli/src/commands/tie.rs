use faan_core::resolve_tie;

use super::{load_session, print_last_round, save_session};
use crate::store::KvStore;

pub fn run(store: &KvStore) -> Result<(), String> {
    let state = load_session(store)?;
    let next = resolve_tie(&state);
    save_session(store, &next)?;
    print_last_round(&next);
    Ok(())
}
