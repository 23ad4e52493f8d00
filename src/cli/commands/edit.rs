use super::{audit, open_store, window_total};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::Aggregator;
use crate::core::edit::EditLogic;
use crate::errors::{AppError, AppResult};
use crate::models::date_key::DateKey;
use crate::ui::messages::{info, success};
use crate::utils::date::at_time;
use crate::utils::time::{format_clock, parse_optional_time};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        date,
        start,
        end,
        next_day,
    } = cmd
    {
        let key: DateKey = date.parse()?;
        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;

        if start.is_none() && end.is_none() {
            return Err(AppError::Validation(
                "nothing to edit: pass --in and/or --out".into(),
            ));
        }

        let punch_in = start
            .map(|t| at_time(&Local, key.date(), t))
            .transpose()?;
        let out_date = if *next_day {
            key.add_days(1)?.date()
        } else {
            key.date()
        };
        let punch_out = end.map(|t| at_time(&Local, out_date, t)).transpose()?;

        let store = open_store(cfg)?;
        let record = EditLogic::edit_day(&store, &key, punch_in, punch_out, cfg.edit_arithmetic)?;

        let msg = format!(
            "{}: in {} out {} → {:.2} Hrs",
            key,
            format_clock(record.punch_in_time, &Local),
            format_clock(record.punch_out_time, &Local),
            record.total_hours
        );
        audit(&store, "edit", &key.to_string(), &msg);
        success(format!("✏️  Day updated. {msg}"));

        let summaries = Aggregator::new(&store).refresh(key, cfg.week_policy)?;
        info(window_total(&summaries.weekly, cfg.week_policy));
    }

    Ok(())
}
