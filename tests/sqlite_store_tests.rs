mod common;
use common::{approx, at, setup_test_db, tz};

use rpunchclock::core::records::DayStore;
use rpunchclock::core::session::SessionTracker;
use rpunchclock::db::kv::{KeyValueStore, SqliteKv};
use rpunchclock::db::log::{load_log, ttlog};
use rpunchclock::db::migrate::run_pending_migrations;
use rpunchclock::db::pool::DbPool;
use rpunchclock::models::date_key::DateKey;
use rpunchclock::models::policy::SpanPolicy;
use rpunchclock::models::store_key::PUNCH_IN_MARKER;

fn key(s: &str) -> DateKey {
    s.parse().expect("valid date key")
}

#[test]
fn test_sqlite_kv_basic_operations() {
    let kv = SqliteKv::new(DbPool::in_memory().unwrap());

    assert_eq!(kv.get_item("2024-01-10").unwrap(), None);

    kv.set_item("2024-01-10", "first").unwrap();
    kv.set_item("2024-01-10", "second").unwrap();
    assert_eq!(kv.get_item("2024-01-10").unwrap().as_deref(), Some("second"));

    kv.remove_item("2024-01-10").unwrap();
    kv.remove_item("2024-01-10").unwrap();
    assert_eq!(kv.get_item("2024-01-10").unwrap(), None);
}

#[test]
fn test_session_persists_across_connections() {
    let (_dir, db_path) = setup_test_db("session_persist");

    {
        let store = DayStore::new(SqliteKv::open(&db_path).unwrap());
        let mut tracker = SessionTracker::restore(&store, tz(), SpanPolicy::PunchOutDay);
        tracker.punch_in(at(2024, 1, 10, 9, 0)).unwrap();
    }

    let store = DayStore::new(SqliteKv::open(&db_path).unwrap());
    let mut tracker = SessionTracker::restore(&store, tz(), SpanPolicy::PunchOutDay);
    assert!(tracker.is_active());

    let rec = tracker.punch_out(at(2024, 1, 10, 17, 30)).unwrap();
    assert!(approx(rec.total_hours, 8.5));
    assert_eq!(store.get(&key("2024-01-10")), rec);
    assert_eq!(store.kv().get_item(PUNCH_IN_MARKER).unwrap(), None);
    assert_eq!(store.kv().day_count().unwrap(), 1);
}

#[test]
fn test_migration_converts_legacy_values_once() {
    let (_dir, db_path) = setup_test_db("legacy_values");

    // A database created before the migration existed.
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE kv (key TEXT PRIMARY KEY, value TEXT NOT NULL, updated_at TEXT NOT NULL);
             INSERT INTO kv VALUES ('2024-01-10', '9000000', '');
             INSERT INTO kv VALUES ('2024-01-11', '{\"punchInTime\":null,\"punchOutTime\":null,\"totalHours\":1}', '');
             INSERT INTO kv VALUES ('punchInTime', '1704873600000', '');",
        )
        .unwrap();
    }

    let kv = SqliteKv::open(&db_path).unwrap();
    let raw = kv.get_item("2024-01-10").unwrap().unwrap();
    assert!(raw.starts_with('{'), "legacy value rewritten: {raw}");
    assert_eq!(
        kv.get_item(PUNCH_IN_MARKER).unwrap().as_deref(),
        Some("1704873600000"),
        "marker untouched"
    );

    let store = DayStore::new(kv);
    assert!(approx(store.get(&key("2024-01-10")).total_hours, 2.5));
    assert!(approx(store.get(&key("2024-01-11")).total_hours, 1.0));

    let conn = &store.kv().pool().conn;
    let applied = || {
        load_log(conn)
            .unwrap()
            .iter()
            .filter(|r| r.operation == "migration_applied")
            .count()
    };
    assert_eq!(applied(), 1);
    run_pending_migrations(conn).unwrap();
    assert_eq!(applied(), 1);
}

#[test]
fn test_internal_log_rows() {
    let pool = DbPool::in_memory().unwrap();
    ttlog(&pool.conn, "punch_in", "2024-01-10", "Punched in at 09:00").unwrap();
    ttlog(&pool.conn, "punch_out", "2024-01-10", "Punched out at 17:30").unwrap();

    let rows = load_log(&pool.conn).unwrap();
    let ops: Vec<&str> = rows
        .iter()
        .filter(|r| r.operation != "migration_applied")
        .map(|r| r.operation.as_str())
        .collect();
    assert_eq!(ops, ["punch_in", "punch_out"]);
}
