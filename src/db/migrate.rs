use crate::models::day_record::DayRecord;
use crate::ui::messages::{success, warning};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, params};

const LEGACY_VALUES_VERSION: &str = "20240301_0001_normalize_legacy_day_values";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn kv_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='kv'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the key-value table backing day records and the punch-in marker.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), version, message],
    )?;
    Ok(())
}

/// Rewrite day values stored as bare milliseconds into day-record JSON.
fn migrate_legacy_day_values(conn: &Connection) -> Result<()> {
    if migration_applied(conn, LEGACY_VALUES_VERSION)? {
        return Ok(());
    }

    let rows: Vec<(String, String)> = {
        let mut stmt = conn.prepare(
            "SELECT key, value FROM kv
             WHERE key GLOB '[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9]'",
        )?;
        stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<_>>()?
    };

    let mut converted = 0;
    for (key, value) in rows {
        if !DayRecord::is_legacy_value(&value) {
            continue;
        }

        let encoded = match DayRecord::decode(&value).and_then(|r| r.unwrap_or_default().encode()) {
            Ok(json) => json,
            Err(e) => {
                warning(format!("Skipping unreadable legacy value for {key}: {e}"));
                continue;
            }
        };

        conn.execute(
            "UPDATE kv SET value = ?1, updated_at = ?2 WHERE key = ?3",
            params![encoded, Local::now().to_rfc3339(), key],
        )?;
        converted += 1;
    }

    mark_applied(
        conn,
        LEGACY_VALUES_VERSION,
        &format!("Converted {converted} legacy day value(s) to day records"),
    )?;

    if converted > 0 {
        success(format!(
            "Migration applied: {} → converted {} legacy day value(s)",
            LEGACY_VALUES_VERSION, converted
        ));
    }

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !kv_table_exists(conn)? {
        create_kv_table(conn)?;
    }

    migrate_legacy_day_values(conn)?;

    Ok(())
}
