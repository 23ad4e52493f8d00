use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::kv::SqliteKv;
use crate::db::migrate::run_pending_migrations;
use crate::db::stats;
use crate::errors::AppResult;
use ansi_term::Colour::{Cyan, Green, Red};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // Opening already brings the schema up to date.
        let kv = SqliteKv::open(&cfg.database)?;
        let conn = &kv.pool().conn;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}", Cyan.paint("▶ Running migrations…"));
            run_pending_migrations(conn)?;
            println!("{}\n", Green.paint("✔ Migration completed."));
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&kv, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}", Cyan.paint("▶ Running integrity check…"));

            let integrity: String =
                conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}\n", Green.paint("✔ Integrity check passed."));
            } else {
                println!("{} {}\n", Red.paint("✘ Integrity check failed:"), integrity);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}", Cyan.paint("▶ Running VACUUM…"));
            conn.execute_batch("VACUUM;")?;
            println!("{}\n", Green.paint("✔ Vacuum completed."));
        }
    }

    Ok(())
}
