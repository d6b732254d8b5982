use tower_stats_store::{SessionStore, StoreConfig};

pub fn run(config: StoreConfig, first: usize, second: usize) -> anyhow::Result<()> {
    let store = SessionStore::open(config);
    if store.len() < 2 {
        anyhow::bail!("Need at least 2 sessions to compare.");
    }

    let comparison = store.compare(first, second)?;
    println!("{}", comparison);
    Ok(())
}
