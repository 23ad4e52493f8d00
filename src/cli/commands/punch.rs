use super::{audit, open_store, window_total};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::Aggregator;
use crate::core::calculator::hours::exact_hours;
use crate::core::session::SessionTracker;
use crate::errors::AppResult;
use crate::models::date_key::DateKey;
use crate::ui::messages::{info, success};
use crate::utils::date::{at_time, today};
use crate::utils::formatting::hours_readable;
use crate::utils::time::parse_optional_time;
use chrono::{DateTime, Local};

/// `--at HH:MM` on today's date, or now.
fn resolve_at(at: Option<&String>) -> AppResult<DateTime<Local>> {
    match parse_optional_time(at)? {
        Some(t) => at_time(&Local, today(), t),
        None => Ok(Local::now()),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let mut tracker = SessionTracker::restore(&store, Local, cfg.span_policy);

    match cmd {
        Commands::In { at } => {
            let at = resolve_at(at.as_ref())?;
            tracker.punch_in(at)?;

            let msg = format!("Punched in at {}", at.format("%H:%M"));
            audit(&store, "punch_in", &DateKey::of(&at).to_string(), &msg);
            success(msg);
        }

        Commands::Out { at } => {
            let at = resolve_at(at.as_ref())?;
            let booked = tracker.tick(&at).map(exact_hours).unwrap_or(0.0);
            let record = tracker.punch_out(at)?;
            let key = DateKey::of(&at);

            let msg = format!(
                "Punched out at {}; booked {}, day total {}",
                at.format("%H:%M"),
                hours_readable(booked),
                hours_readable(record.total_hours)
            );
            audit(&store, "punch_out", &key.to_string(), &msg);
            success(msg);

            let summaries = Aggregator::new(&store).refresh(key, cfg.week_policy)?;
            info(format!(
                "{} | This week: {}",
                window_total(&summaries.weekly, cfg.week_policy),
                summaries.eight_week[0].hours
            ));
        }

        _ => {}
    }

    Ok(())
}
