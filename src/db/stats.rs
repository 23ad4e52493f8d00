use crate::db::kv::SqliteKv;
use crate::errors::AppResult;
use crate::models::store_key::PUNCH_IN_MARKER;
use ansi_term::Colour::{Cyan, Fixed, Green, Yellow};
use rusqlite::OptionalExtension;
use std::fs;

const DAY_KEY_GLOB: &str = "[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9]";

pub fn print_db_info(kv: &SqliteKv, db_path: &str) -> AppResult<()> {
    let conn = &kv.pool().conn;
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{} {}", Cyan.paint("• File:"), Yellow.paint(db_path));
    println!("{} {:.2} MB", Cyan.paint("• Size:"), file_mb);

    //
    // 2) DAY RECORDS
    //
    let count = kv.day_count()?;
    println!(
        "{} {}",
        Cyan.paint("• Day records:"),
        Green.paint(count.to_string())
    );

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = conn
        .query_row(
            "SELECT key FROM kv WHERE key GLOB ?1 ORDER BY key ASC LIMIT 1",
            [DAY_KEY_GLOB],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = conn
        .query_row(
            "SELECT key FROM kv WHERE key GLOB ?1 ORDER BY key DESC LIMIT 1",
            [DAY_KEY_GLOB],
            |row| row.get(0),
        )
        .optional()?;

    let placeholder = Fixed(8).paint("--").to_string();
    println!("{}", Cyan.paint("• Date range:"));
    println!("    from: {}", first_date.unwrap_or_else(|| placeholder.clone()));
    println!("    to:   {}", last_date.unwrap_or(placeholder));

    //
    // 4) OPEN SESSION
    //
    let marker: Option<String> = conn
        .query_row(
            "SELECT value FROM kv WHERE key = ?1",
            [PUNCH_IN_MARKER],
            |row| row.get(0),
        )
        .optional()?;
    let session = if marker.is_some() { "yes" } else { "no" };
    println!("{} {}", Cyan.paint("• Open session:"), session);

    //
    // 5) LOG SIZE
    //
    let log_rows: i64 = conn.query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{} {}", Cyan.paint("• Log rows:"), log_rows);
    println!();

    Ok(())
}
