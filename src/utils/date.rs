use crate::errors::{AppError, AppResult};
use crate::models::date_key::DateKey;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, TimeZone};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Day of month with its English ordinal suffix: `1st`, `2nd`, `11th`, `23rd`.
pub fn ordinal_day(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

/// `10th Jan, 24 (Wednesday)`
pub fn day_label(key: DateKey) -> String {
    let d = key.date();
    format!("{} {}", ordinal_day(d), d.format("%b, %y (%A)"))
}

/// Monday to Friday of the week starting at `monday`: `8th Jan - 12th Jan`.
pub fn week_label(monday: DateKey) -> AppResult<String> {
    let mon = monday.date();
    let fri = monday.add_days(4)?.date();
    Ok(format!(
        "{} {} - {} {}",
        ordinal_day(mon),
        mon.format("%b"),
        ordinal_day(fri),
        fri.format("%b")
    ))
}

/// Resolve a wall-clock time on `date` in `tz`. In a DST overlap the earlier
/// instant wins; a time skipped by DST is rejected.
pub fn at_time<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: NaiveTime) -> AppResult<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or_else(|| AppError::InvalidTime(format!("{date} {time} does not exist locally")))
}
