mod common;

use common::{report_with_wave, temp_store, BATTLE_REPORT};
use tower_stats_core::FieldValue;
use tower_stats_store::{SessionStore, StoreConfig, StoreError};

#[test]
fn test_full_battle_report() {
    let (_temp, mut store) = temp_store();
    let record = store.add_session(BATTLE_REPORT).unwrap();

    assert_eq!(record.game_time(), "2d 8h 12m 19s");
    assert_eq!(record.tier(), 11);
    assert_eq!(record.wave(), 5412);
    assert_eq!(record.killed_by(), "Vampire");
    assert_eq!(record.cash_earned(), "$4.27T");
    assert_eq!(record.total_enemies(), 391_022);
    assert_eq!(record.destroyed_by_death_ray(), 12);
    assert_eq!(record.flame_bot_damage(), "1.2q");
    assert_eq!(record.rare_modules(), 1);
    assert_eq!(record.common_modules(), 0);
    assert_eq!(record.get("lifesteal"), Some(FieldValue::Counter(1234)));
}

#[test]
fn test_append_preserves_order_across_restart() {
    let (temp, mut store) = temp_store();
    let waves = [120, 450, 300, 999];
    for wave in waves {
        store.add_session(&report_with_wave(wave)).unwrap();
    }

    let before = store.sessions();
    assert_eq!(before.len(), waves.len());
    let stored: Vec<u64> = before.iter().map(|r| r.wave()).collect();
    assert_eq!(stored, waves);

    // Simulate a process restart
    let reopened = SessionStore::open(StoreConfig::new(temp.path().join("tower_stats.json")));
    assert_eq!(reopened.sessions(), before);
    assert_eq!(reopened.latest().map(|r| r.wave()), Some(999));
}

#[test]
fn test_latest_tracks_appends() {
    let (_temp, mut store) = temp_store();
    assert!(store.latest().is_none());

    let first = store.add_session(&report_with_wave(10)).unwrap();
    assert_eq!(store.latest(), Some(&first));

    let second = store.add_session("Killed By    Ranged").unwrap();
    assert_eq!(store.latest(), Some(&second));
}

#[test]
fn test_compare_reports_fixed_fields() {
    let (_temp, mut store) = temp_store();
    store.add_session(BATTLE_REPORT).unwrap();
    store.add_session(&report_with_wave(6000)).unwrap();

    let cmp = store.compare(0, 1).unwrap();
    assert_eq!(cmp.first.wave, 5412);
    assert_eq!(cmp.second.wave, 6000);
    assert_eq!(cmp.first.total_enemies, 391_022);
    assert_eq!(cmp.first.coins_earned, "110.82T");
    assert_eq!(cmp.second.coins_earned, "600B");

    let text = cmp.to_string();
    assert!(text.contains("Wave Progress: 5412 vs 6000"));
    assert!(text.contains("Coins Earned: 110.82T vs 600B"));
}

#[test]
fn test_compare_invalid_index_leaves_store_unchanged() {
    let (_temp, mut store) = temp_store();
    store.add_session(&report_with_wave(1)).unwrap();
    store.add_session(&report_with_wave(2)).unwrap();
    let before = store.sessions();
    let on_disk = std::fs::read_to_string(store.path()).unwrap();

    for (a, b) in [(0, 2), (2, 0), (usize::MAX, 1)] {
        let err = store.compare(a, b).unwrap_err();
        assert!(matches!(err, StoreError::InvalidIndex { len: 2, .. }));
        assert!(err.to_string().starts_with("Invalid session indices"));
    }

    assert_eq!(store.sessions(), before);
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), on_disk);
}

#[test]
fn test_corrupt_history_starts_empty() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("tower_stats.json");
    std::fs::write(&path, "this is not json").unwrap();

    let mut store = SessionStore::open(StoreConfig::new(&path));
    assert!(store.is_empty());

    store.add_session(&report_with_wave(42)).unwrap();
    let reopened = SessionStore::open(StoreConfig::new(&path));
    assert_eq!(reopened.len(), 1);
}

#[test]
fn test_mistyped_session_does_not_cost_the_history() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("tower_stats.json");
    std::fs::write(
        &path,
        r#"[{"wave": 100}, {"wave": 200}, {"wave": 300, "lifesteal": -5}]"#,
    )
    .unwrap();

    let mut store = SessionStore::open(StoreConfig::new(&path));
    assert_eq!(store.len(), 3);
    store.add_session("Wave    400").unwrap();

    let reopened = SessionStore::open(StoreConfig::new(&path));
    let waves: Vec<u64> = reopened.sessions().iter().map(|r| r.wave()).collect();
    assert_eq!(waves, vec![100, 200, 300, 400]);
    assert_eq!(reopened.get(2).map(|r| r.lifesteal()), Some(0));
}

#[test]
fn test_explicit_load_and_persist() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("tower_stats.json");

    let mut writer = SessionStore::new(StoreConfig::new(&path));
    writer.add_session(&report_with_wave(7)).unwrap();

    let mut reader = SessionStore::new(StoreConfig::new(&path));
    assert!(reader.is_empty());
    assert_eq!(reader.load(), 1);

    std::fs::remove_file(&path).unwrap();
    reader.persist().unwrap();
    assert_eq!(reader.load(), 1);
}
