use anyhow::Context;
use std::io::Read;
use std::path::Path;

use tower_stats_store::{SessionStore, SessionSummary, StoreConfig};

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stats from stdin")?;
            Ok(buf)
        }
    }
}

fn add_text(store: &mut SessionStore, text: &str) -> anyhow::Result<String> {
    if text.trim().is_empty() {
        return Ok("No data entered.".to_string());
    }

    let (record, report) = store.add_session_with_report(text)?;
    let mut out = format!(
        "Session added successfully! ID: {}\n\n{}",
        record.session_id(),
        SessionSummary(&record)
    );
    if !report.unrecognized.is_empty() {
        out.push_str(&format!(
            "\n\nIgnored {} unrecognized line(s): {}",
            report.unrecognized.len(),
            report.unrecognized.join(", ")
        ));
    }
    if !report.zeroed_counters.is_empty() {
        out.push_str(&format!(
            "\nNon-numeric values stored as 0: {}",
            report.zeroed_counters.join(", ")
        ));
    }
    Ok(out)
}

pub fn run(config: StoreConfig, file: Option<&Path>) -> anyhow::Result<()> {
    let text = read_input(file)?;
    let mut store = SessionStore::open(config);
    println!("{}", add_text(&mut store, &text)?);
    Ok(())
}
