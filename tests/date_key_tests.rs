mod common;
use common::at;

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use rpunchclock::errors::AppError;
use rpunchclock::models::date_key::{DateKey, WeekWindow};
use rpunchclock::models::policy::WeekPolicy;
use rpunchclock::utils::date::{day_label, ordinal_day, week_label};

fn key(s: &str) -> DateKey {
    s.parse().expect("valid date key")
}

#[test]
fn test_same_local_day_gives_same_key() {
    let first = at(2024, 1, 10, 0, 0);
    let last = at(2024, 1, 10, 23, 59);

    assert_eq!(DateKey::of(&first), DateKey::of(&last));
    assert_eq!(DateKey::of(&first).to_string(), "2024-01-10");
}

#[test]
fn test_key_follows_local_calendar_not_utc() {
    // 00:30 local at UTC+1 is still the previous day in UTC.
    let local = at(2024, 1, 10, 0, 30);
    let utc = local.with_timezone(&Utc);

    assert_eq!(DateKey::of(&local).to_string(), "2024-01-10");
    assert_eq!(DateKey::of(&utc).to_string(), "2024-01-09");
}

#[test]
fn test_parse_rejects_garbage() {
    assert!("2024-13-01".parse::<DateKey>().is_err());
    assert!("punchInTime".parse::<DateKey>().is_err());
    assert_eq!(key(" 2024-02-29 ").to_string(), "2024-02-29");
}

#[test]
fn test_rolling_window_ends_at_anchor() {
    let w = WeekWindow::new(key("2024-01-10"), 0, WeekPolicy::Rolling).unwrap();

    assert_eq!(w.start(), key("2024-01-04"));
    assert_eq!(w.end(), key("2024-01-10"));
}

#[test]
fn test_rolling_window_with_offset() {
    let w = WeekWindow::new(key("2024-01-10"), 2, WeekPolicy::Rolling).unwrap();

    assert_eq!(w.end(), key("2023-12-27"));
    assert_eq!(w.start(), key("2023-12-21"));
}

#[test]
fn test_aligned_window_is_monday_to_sunday() {
    // Wednesday
    let w = WeekWindow::new(key("2024-01-10"), 0, WeekPolicy::Aligned).unwrap();
    assert_eq!(w.start(), key("2024-01-08"));
    assert_eq!(w.end(), key("2024-01-14"));

    let prev = WeekWindow::new(key("2024-01-10"), 1, WeekPolicy::Aligned).unwrap();
    assert_eq!(prev.start(), key("2024-01-01"));
}

#[test]
fn test_aligned_window_sunday_belongs_to_previous_monday() {
    let sunday = key("2024-01-14");
    assert_eq!(sunday.weekday_from_sunday(), 0);

    let w = WeekWindow::new(sunday, 0, WeekPolicy::Aligned).unwrap();
    assert_eq!(w.start(), key("2024-01-08"));
    assert_eq!(w.end(), sunday);
}

#[test]
fn test_aligned_window_on_monday_starts_there() {
    let monday = key("2024-01-08");
    assert_eq!(monday.monday().unwrap(), monday);
}

#[test]
fn test_windows_have_seven_distinct_ordered_days() {
    let anchors = ["2024-01-01", "2024-02-29", "2024-03-31", "2023-12-31", "2024-10-27"];

    for anchor in anchors {
        for policy in [WeekPolicy::Rolling, WeekPolicy::Aligned] {
            for offset in 0..8 {
                let w = WeekWindow::new(key(anchor), offset, policy).unwrap();
                let days = w.days();

                assert_eq!(days.len(), 7);
                for pair in days.windows(2) {
                    assert_eq!(pair[0].add_days(1).unwrap(), pair[1], "{anchor} {policy} {offset}");
                }
            }
        }
    }
}

#[test]
fn test_window_around_timestamp_uses_its_local_day() {
    let late = FixedOffset::east_opt(-5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 14, 22, 0, 0)
        .unwrap();

    // Still Sunday locally, although it is Monday in UTC.
    let w = WeekWindow::around(&late, 0, WeekPolicy::Aligned).unwrap();
    assert_eq!(w.end(), key("2024-01-14"));
}

#[test]
fn test_labels() {
    let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();

    assert_eq!(ordinal_day(d("2024-01-01")), "1st");
    assert_eq!(ordinal_day(d("2024-01-02")), "2nd");
    assert_eq!(ordinal_day(d("2024-01-03")), "3rd");
    assert_eq!(ordinal_day(d("2024-01-11")), "11th");
    assert_eq!(ordinal_day(d("2024-01-12")), "12th");
    assert_eq!(ordinal_day(d("2024-01-13")), "13th");
    assert_eq!(ordinal_day(d("2024-01-22")), "22nd");
    assert_eq!(ordinal_day(d("2024-01-31")), "31st");

    assert_eq!(day_label(key("2024-01-10")), "10th Jan, 24 (Wednesday)");
    assert_eq!(week_label(key("2024-01-08")).unwrap(), "8th Jan - 12th Jan");
    assert_eq!(week_label(key("2024-01-29")).unwrap(), "29th Jan - 2nd Feb");
}

#[test]
fn test_day_arithmetic_past_calendar_limits_fails() {
    let last = DateKey::from(NaiveDate::MAX);

    assert!(matches!(last.add_days(1), Err(AppError::DateOutOfRange(_))));
    assert!(matches!(key("2024-01-10").add_days(i64::MAX), Err(AppError::DateOutOfRange(_))));
    assert!(week_label(last).is_err());
}

#[test]
fn test_window_offset_out_of_range_fails() {
    let anchor = key("2024-01-10");

    for policy in [WeekPolicy::Rolling, WeekPolicy::Aligned] {
        for offset in [100_000_000, -100_000_000, i64::MAX, i64::MIN] {
            let res = WeekWindow::new(anchor, offset, policy);
            assert!(matches!(res, Err(AppError::DateOutOfRange(_))), "{policy} {offset}");
        }
    }
}
