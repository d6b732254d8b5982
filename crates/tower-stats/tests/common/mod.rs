#![allow(dead_code)]

use tower_stats_store::{SessionStore, StoreConfig};

/// A trimmed battle report as pasted from the game
pub const BATTLE_REPORT: &str = "\
Game Time                   2d 8h 12m 19s
Real Time                   11h 38m 47s
Tier                        11
Wave                        5,412
Killed By                   Vampire
Coins Earned                110.82T
Cash Earned                 $4.27T
Cells Earned                31.45K
Gem Blocks Tapped           14
Damage Dealt                9.31Q
Death Defy                  2
Lifesteal                   1,234
Coins from Golden Tower     22.08T
Total Enemies               391,022
Basic                       280,114
Boss                        541
Destroyed by Death ray      12
Flame bot damage            1.2q
Guardian catches            87
Gems                        26
Rare Modules                1
";

pub fn report_with_wave(wave: u64) -> String {
    format!("Tier    9\nWave    {}\nCoins Earned    {}B", wave, wave / 10)
}

pub fn temp_store() -> (tempfile::TempDir, SessionStore) {
    let temp = tempfile::TempDir::new().unwrap();
    let store = SessionStore::open(StoreConfig::new(temp.path().join("tower_stats.json")));
    (temp, store)
}
