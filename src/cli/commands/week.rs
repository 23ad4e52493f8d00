use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::Aggregator;
use crate::errors::AppResult;
use crate::models::date_key::DateKey;
use crate::models::policy::WeekPolicy;
use crate::ui::messages::header;
use crate::utils::date::day_label;
use crate::utils::formatting::hours_readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_clock;
use ansi_term::Colour::Fixed;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week {
        offset,
        aligned,
        rolling,
    } = cmd
    {
        let policy = if *aligned {
            WeekPolicy::Aligned
        } else if *rolling {
            WeekPolicy::Rolling
        } else {
            cfg.week_policy
        };

        let store = open_store(cfg)?;
        let anchor = DateKey::of(&Local::now());
        let summary = Aggregator::new(&store).weekly_summary(anchor, *offset, policy)?;

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        let mut table = Table::new(
            vec![
                Column::new("DATE", 26),
                Column::new("IN", 5),
                Column::new("OUT", 5),
                Column::new("HOURS", 6),
                Column::new("", 7),
            ],
            sep,
        );

        let mut total = 0.0;
        for (key, record) in &summary {
            total += record.total_hours;
            let hours = format!("{:.2}", record.total_hours);
            let hours = if record.total_hours == 0.0 {
                Fixed(8).paint(hours).to_string()
            } else {
                hours
            };

            table.add_row(vec![
                day_label(*key),
                format_clock(record.punch_in_time, &Local),
                format_clock(record.punch_out_time, &Local),
                hours,
                hours_readable(record.total_hours),
            ]);
        }

        header(format!("Week ({policy}, offset {offset})"));
        print!("{}", table.render());
        println!("Total: {:.2} Hrs ({})", total, hours_readable(total));
    }

    Ok(())
}
