use tower_stats_store::{SessionListing, SessionStore, StoreConfig};

use super::NO_SESSIONS;

pub fn run(config: StoreConfig) -> anyhow::Result<()> {
    let store = SessionStore::open(config);
    let sessions = store.sessions();

    if sessions.is_empty() {
        println!("{}", NO_SESSIONS);
        return Ok(());
    }

    println!("{}", SessionListing(&sessions));
    Ok(())
}
