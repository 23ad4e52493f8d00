mod common;
use common::{init_db, rpc, setup_test_db};
use predicates::str::contains;

#[test]
fn test_init_creates_database() {
    let (_dir, db_path) = setup_test_db("cli_init");

    rpc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_punch_in_and_out_books_the_day() {
    let (_dir, db_path) = setup_test_db("cli_punch");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "--test", "in", "--at", "09:00"])
        .assert()
        .success()
        .stdout(contains("Punched in at 09:00"));

    rpc()
        .args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("PUNCHED IN"));

    rpc()
        .args(["--db", &db_path, "--test", "out", "--at", "17:30"])
        .assert()
        .success()
        .stdout(contains("Punched out at 17:30"))
        .stdout(contains("08h 30m"));

    rpc()
        .args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Not punched in"))
        .stdout(contains("Booked today: 08h 30m"));

    rpc()
        .args(["--db", &db_path, "--test", "week"])
        .assert()
        .success()
        .stdout(contains("8.50"));

    rpc()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("punch_in"))
        .stdout(contains("punch_out"));
}

#[test]
fn test_double_punch_in_fails() {
    let (_dir, db_path) = setup_test_db("cli_double_in");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "--test", "in", "--at", "08:00"])
        .assert()
        .success();

    rpc()
        .args(["--db", &db_path, "--test", "in", "--at", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid state"));
}

#[test]
fn test_punch_out_while_idle_fails() {
    let (_dir, db_path) = setup_test_db("cli_idle_out");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "--test", "out", "--at", "17:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid state"));
}

#[test]
fn test_punch_out_before_punch_in_fails() {
    let (_dir, db_path) = setup_test_db("cli_negative");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "--test", "in", "--at", "10:00"])
        .assert()
        .success();

    rpc()
        .args(["--db", &db_path, "--test", "out", "--at", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));

    // The session is still open.
    rpc()
        .args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("PUNCHED IN"));
}

#[test]
fn test_edit_and_weeks() {
    let (_dir, db_path) = setup_test_db("cli_edit");
    init_db(&db_path);

    rpc()
        .args([
            "--db", &db_path, "--test", "edit", "2024-01-10", "--in", "09:00", "--out", "17:30",
        ])
        .assert()
        .success()
        .stdout(contains("8.50 Hrs"))
        .stdout(contains("2024-01-04 to 2024-01-10 (rolling): 08h 30m"));

    rpc()
        .args(["--db", &db_path, "--test", "weeks"])
        .assert()
        .success()
        .stdout(contains("Last 8 weeks"))
        .stdout(contains("N/A"));

    rpc()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("edit"));
}

#[test]
fn test_edit_rejects_bad_input() {
    let (_dir, db_path) = setup_test_db("cli_edit_bad");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "--test", "edit", "2024-13-40", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    rpc()
        .args(["--db", &db_path, "--test", "edit", "2024-01-10"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));

    rpc()
        .args([
            "--db", &db_path, "--test", "edit", "2024-01-10", "--in", "18:00", "--out", "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Validation error"));
}

#[test]
fn test_db_info_and_check() {
    let (_dir, db_path) = setup_test_db("cli_db");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "--test", "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_week_offset_out_of_range_is_an_error() {
    let (_dir, db_path) = setup_test_db("cli_week_range");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "--test", "week", "--offset", "100000000"])
        .assert()
        .code(1)
        .stderr(contains("Date out of range"));

    rpc()
        .args(["--db", &db_path, "--test", "week", "--offset=-100000000"])
        .assert()
        .code(1)
        .stderr(contains("Date out of range"));
}
