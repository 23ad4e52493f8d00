pub mod config;
pub mod db;
pub mod edit;
pub mod init;
pub mod log;
pub mod punch;
pub mod status;
pub mod week;
pub mod weeks;

use crate::config::Config;
use crate::core::records::DayStore;
use crate::db::kv::SqliteKv;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::models::policy::WeekPolicy;
use crate::models::week_summary::WeeklySummary;
use crate::utils::formatting::hours_readable;

/// Open the configured database as a day store.
pub(crate) fn open_store(cfg: &Config) -> AppResult<DayStore<SqliteKv>> {
    Ok(DayStore::new(SqliteKv::open(&cfg.database)?))
}

/// Append to the internal log; a failure here never fails the command.
pub(crate) fn audit(store: &DayStore<SqliteKv>, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&store.kv().pool().conn, operation, target, message) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }
}

/// `2024-01-04 to 2024-01-10 (rolling): 08h 30m`
pub(crate) fn window_total(weekly: &WeeklySummary, policy: WeekPolicy) -> String {
    let total: f64 = weekly.values().map(|r| r.total_hours).sum();
    match (weekly.keys().next(), weekly.keys().next_back()) {
        (Some(first), Some(last)) => {
            format!("{first} to {last} ({policy}): {}", hours_readable(total))
        }
        _ => format!("({policy}): {}", hours_readable(total)),
    }
}
