use rpunchclock::config::Config;
use rpunchclock::config::migrate::{CONFIG_FIELDS, migrate_config, missing_fields};
use rpunchclock::errors::AppError;
use rpunchclock::models::policy::{HoursArithmetic, SpanPolicy, WeekPolicy};
use std::fs;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("none.conf")).unwrap();

    assert_eq!(cfg.daily_target_hours, 9.0);
    assert_eq!(cfg.week_policy, WeekPolicy::Rolling);
    assert_eq!(cfg.span_policy, SpanPolicy::PunchOutDay);
    assert_eq!(cfg.edit_arithmetic, HoursArithmetic::Exact);
    assert_eq!(cfg.separator_char, "-");
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rpunchclock.conf");
    fs::write(
        &path,
        "database: /tmp/x.sqlite\ndaily_target_hours: 7.5\nspan_policy: split\n",
    )
    .unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.database, "/tmp/x.sqlite");
    assert_eq!(cfg.daily_target_hours, 7.5);
    assert_eq!(cfg.span_policy, SpanPolicy::Split);
    assert_eq!(cfg.week_policy, WeekPolicy::Rolling);

    let missing = missing_fields(&path).unwrap();
    assert_eq!(
        missing,
        ["week_policy", "edit_arithmetic", "separator_char"]
    );
}

#[test]
fn test_migrate_writes_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rpunchclock.conf");
    fs::write(&path, "database: /tmp/x.sqlite\nedit_arithmetic: truncated_minutes\n").unwrap();

    assert!(migrate_config(&path).unwrap());
    assert!(missing_fields(&path).unwrap().is_empty());
    assert!(!migrate_config(&path).unwrap());

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.edit_arithmetic, HoursArithmetic::TruncatedMinutes);
    assert_eq!(cfg.database, "/tmp/x.sqlite");
}

#[test]
fn test_missing_file_lacks_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let missing = missing_fields(&dir.path().join("none.conf")).unwrap();
    assert_eq!(missing, CONFIG_FIELDS);
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rpunchclock.conf");

    fs::write(&path, "daily_target_hours: 0\n").unwrap();
    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));

    fs::write(&path, "week_policy: fortnightly\n").unwrap();
    assert!(matches!(Config::load_from(&path), Err(AppError::Yaml(_))));
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("rpunchclock.conf");
    let cfg = Config {
        database: "/tmp/y.sqlite".into(),
        week_policy: WeekPolicy::Aligned,
        ..Config::default()
    };

    cfg.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), cfg);
}
