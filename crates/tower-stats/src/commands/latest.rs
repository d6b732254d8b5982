use tower_stats_store::{SessionStore, SessionSummary, StoreConfig};

use super::NO_SESSIONS;

fn render(store: &SessionStore) -> String {
    match store.latest() {
        Some(record) => SessionSummary(record).to_string(),
        None => NO_SESSIONS.to_string(),
    }
}

pub fn run(config: StoreConfig) -> anyhow::Result<()> {
    let store = SessionStore::open(config);
    println!("{}", render(&store));
    Ok(())
}
