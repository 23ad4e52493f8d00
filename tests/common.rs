#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, FixedOffset, TimeZone};
use rpunchclock::core::records::DayStore;
use rpunchclock::db::memory::MemoryKv;
use tempfile::TempDir;

pub fn rpc() -> Command {
    cargo_bin_cmd!("rpunchclock")
}

/// Fresh temp dir plus the database path inside it. Keep the dir alive for
/// the duration of the test.
pub fn setup_test_db(name: &str) -> (TempDir, String) {
    let dir = tempfile::Builder::new()
        .prefix(name)
        .tempdir()
        .expect("create temp dir");
    let db_path = dir
        .path()
        .join("rpunchclock.sqlite")
        .to_string_lossy()
        .to_string();
    (dir, db_path)
}

/// `init` in test mode (the user's config file is left alone).
pub fn init_db(db_path: &str) {
    rpc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// UTC+1, fixed so day boundaries are deterministic.
pub fn tz() -> FixedOffset {
    FixedOffset::east_opt(3600).expect("valid offset")
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
    tz().with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("unambiguous local time")
}

pub fn memory_store() -> DayStore<MemoryKv> {
    DayStore::new(MemoryKv::new())
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
