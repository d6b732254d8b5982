//! Text views over stored sessions

use std::fmt;

use tower_stats_core::Record;

/// Empty text shows as `N/A`
///
/// Every key is present in a stored session, so an empty value would
/// otherwise print as a blank; `N/A` is shown instead of the empty string.
fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "Unknown"
    } else {
        value
    }
}

/// The compared subset of one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparedSession {
    pub index: usize,
    pub session_id: String,
    pub wave: u64,
    pub total_enemies: u64,
    pub coins_earned: String,
}

impl ComparedSession {
    pub fn new(index: usize, record: &Record) -> Self {
        Self {
            index,
            session_id: record.session_id().to_string(),
            wave: record.wave(),
            total_enemies: record.total_enemies(),
            coins_earned: record.coins_earned().to_string(),
        }
    }
}

/// Side-by-side summary of two sessions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub first: ComparedSession,
    pub second: ComparedSession,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = (&self.first, &self.second);
        writeln!(f, "=== Session Comparison ===")?;
        writeln!(f, "Session 1: {}", or_unknown(&a.session_id))?;
        writeln!(f, "Session 2: {}", or_unknown(&b.session_id))?;
        writeln!(f, "Wave Progress: {} vs {}", a.wave, b.wave)?;
        writeln!(f, "Total Enemies: {} vs {}", a.total_enemies, b.total_enemies)?;
        write!(
            f,
            "Coins Earned: {} vs {}",
            or_na(&a.coins_earned),
            or_na(&b.coins_earned)
        )
    }
}

/// Headline statistics of one session
pub struct SessionSummary<'a>(pub &'a Record);

impl fmt::Display for SessionSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "=== Game Session: {} ===", or_unknown(r.session_id()))?;
        writeln!(f, "Timestamp: {}", or_unknown(r.timestamp()))?;
        writeln!(f, "Game Time: {}", or_na(r.game_time()))?;
        writeln!(f, "Real Time: {}", or_na(r.real_time()))?;
        writeln!(f, "Tier: {}", r.tier())?;
        writeln!(f, "Wave: {}", r.wave())?;
        writeln!(f, "Killed By: {}", or_na(r.killed_by()))?;
        writeln!(f, "Coins Earned: {}", or_na(r.coins_earned()))?;
        writeln!(f, "Cash Earned: {}", or_na(r.cash_earned()))?;
        writeln!(f, "Total Enemies: {}", r.total_enemies())?;
        write!(f, "Damage Dealt: {}", or_na(r.damage_dealt()))
    }
}

/// One line per session: position, id and wave reached
pub struct SessionListing<'a>(pub &'a [Record]);

impl fmt::Display for SessionListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}: {} - Wave {}",
                i,
                or_unknown(record.session_id()),
                record.wave()
            )?;
        }
        Ok(())
    }
}
