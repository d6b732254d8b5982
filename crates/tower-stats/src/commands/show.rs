use tower_stats_store::{SessionStore, SessionSummary, StoreConfig};

pub fn run(config: StoreConfig, index: usize) -> anyhow::Result<()> {
    let store = SessionStore::open(config);
    let record = store.get(index).ok_or_else(|| {
        anyhow::anyhow!(
            "no session at index {} (recorded sessions: {})",
            index,
            store.len()
        )
    })?;
    println!("{}", SessionSummary(record));
    Ok(())
}
