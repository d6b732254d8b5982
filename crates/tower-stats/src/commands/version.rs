pub fn run() -> anyhow::Result<()> {
    println!("tower-stats {}", env!("CARGO_PKG_VERSION"));
    println!(
        "{} recognized stat labels",
        tower_stats_core::schema::fields().len()
    );
    Ok(())
}
