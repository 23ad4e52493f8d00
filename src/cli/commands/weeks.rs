use super::open_store;
use crate::config::Config;
use crate::core::aggregate::Aggregator;
use crate::errors::AppResult;
use crate::models::date_key::DateKey;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};
use chrono::Local;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let anchor = DateKey::of(&Local::now());
    let weeks = Aggregator::new(&store).eight_week_summary(anchor)?;

    let sep = cfg.separator_char.chars().next().unwrap_or('-');
    let mut table = Table::new(vec![Column::new("WEEK", 20), Column::new("TOTAL", 10)], sep);
    for week in &weeks {
        table.add_row(vec![week.label.clone(), week.hours.to_string()]);
    }

    header("Last 8 weeks");
    print!("{}", table.render());
    Ok(())
}
