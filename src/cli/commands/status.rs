use super::open_store;
use crate::config::Config;
use crate::core::session::SessionTracker;
use crate::errors::AppResult;
use crate::models::date_key::DateKey;
use crate::ui::messages::info;
use crate::utils::formatting::{bold, hours_readable, progress_bar};
use crate::utils::time::format_elapsed;
use chrono::Local;

const BAR_WIDTH: usize = 30;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let tracker = SessionTracker::restore(&store, Local, cfg.span_policy);
    let now = Local::now();
    let today = store.get(&DateKey::of(&now));

    match tracker.state().start_time() {
        Some(start) => {
            let elapsed = tracker.tick(&now)?;
            let ratio = tracker.progress(&now, cfg.daily_target_hours)?;

            println!("{} since {}", bold("PUNCHED IN"), start.format("%Y-%m-%d %H:%M"));
            println!("Elapsed:  {}", format_elapsed(elapsed));
            println!(
                "Progress: {} of {}",
                progress_bar(ratio, BAR_WIDTH),
                hours_readable(cfg.daily_target_hours)
            );
        }
        None => info("Not punched in."),
    }

    println!("Booked today: {}", hours_readable(today.total_hours));
    Ok(())
}
