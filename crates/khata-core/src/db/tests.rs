//! Record store tests

use super::*;
use crate::models::*;

use chrono::NaiveDate;
use rusqlite::params;

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn test_open_creates_records_table() {
    let db = Database::in_memory().unwrap();
    let conn = db.conn().unwrap();

    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('records') WHERE name IN ('key', 'value', 'updated_at')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 3, "records table should have 3 expected columns");
}

#[test]
fn test_missing_record_loads_as_none() {
    let db = Database::in_memory().unwrap();
    let loaded: Option<StreakState> = db.load_record(STREAK_RECORD).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_load_or_default_reports_recovery() {
    let db = Database::in_memory().unwrap();

    let (config, defaulted) = db.load_or_default::<LimitConfig>(CONFIG_RECORD).unwrap();
    assert!(defaulted);
    assert_eq!(config.daily_limit, DEFAULT_DAILY_LIMIT);

    db.save_record(CONFIG_RECORD, &config).unwrap();
    let (_, defaulted) = db.load_or_default::<LimitConfig>(CONFIG_RECORD).unwrap();
    assert!(!defaulted, "a healthy read must not report recovery");
}

#[test]
fn test_expenses_round_trip() {
    let db = Database::in_memory().unwrap();

    let mut log = ExpenseLog::default();
    log.push(day("2026-01-18"), 299);
    log.push(day("2026-01-18"), 120);
    log.push(day("2026-01-19"), 50);

    db.save_record(EXPENSES_RECORD, &log).unwrap();
    let (loaded, defaulted) = db.load_or_default::<ExpenseLog>(EXPENSES_RECORD).unwrap();

    assert!(!defaulted);
    assert_eq!(loaded.amounts_for(day("2026-01-18")), &[299, 120]);
    assert_eq!(loaded.amounts_for(day("2026-01-19")), &[50]);
    assert_eq!(loaded.day_count(), 2);
}

#[test]
fn test_config_round_trip() {
    let db = Database::in_memory().unwrap();

    let config = LimitConfig { daily_limit: 750 };
    db.save_record(CONFIG_RECORD, &config).unwrap();

    let loaded: Option<LimitConfig> = db.load_record(CONFIG_RECORD).unwrap();
    assert_eq!(loaded, Some(config));
}

#[test]
fn test_streak_round_trip() {
    let db = Database::in_memory().unwrap();

    let state = StreakState {
        current_streak: 4,
        best_streak: 9,
        last_update_date: Some(day("2026-01-18")),
    };
    db.save_record(STREAK_RECORD, &state).unwrap();

    let loaded: Option<StreakState> = db.load_record(STREAK_RECORD).unwrap();
    assert_eq!(loaded, Some(state));
}

#[test]
fn test_streak_round_trip_without_date() {
    let db = Database::in_memory().unwrap();

    let state = StreakState {
        current_streak: 0,
        best_streak: 2,
        last_update_date: None,
    };
    db.save_record(STREAK_RECORD, &state).unwrap();

    let loaded: Option<StreakState> = db.load_record(STREAK_RECORD).unwrap();
    assert_eq!(loaded, Some(state));
}

#[test]
fn test_corrupt_record_loads_as_absent() {
    let db = Database::in_memory().unwrap();
    let conn = db.conn().unwrap();

    conn.execute(
        "INSERT INTO records (key, value) VALUES (?1, 'not json {{{')",
        params![STREAK_RECORD],
    )
    .unwrap();
    drop(conn);

    let loaded: Option<StreakState> = db.load_record(STREAK_RECORD).unwrap();
    assert!(loaded.is_none(), "corruption must not surface as an error");

    let (state, defaulted) = db.load_or_default::<StreakState>(STREAK_RECORD).unwrap();
    assert!(defaulted);
    assert_eq!(state, StreakState::default());
}

#[test]
fn test_save_record_overwrites() {
    let db = Database::in_memory().unwrap();

    db.save_record(CONFIG_RECORD, &LimitConfig { daily_limit: 300 })
        .unwrap();
    db.save_record(CONFIG_RECORD, &LimitConfig { daily_limit: 800 })
        .unwrap();

    let (config, _) = db.load_or_default::<LimitConfig>(CONFIG_RECORD).unwrap();
    assert_eq!(config.daily_limit, 800);
}
