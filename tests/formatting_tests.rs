use rpunchclock::utils::formatting::{
    bold, hours_readable, pad_right, progress_bar, strip_ansi, visible_width,
};

#[test]
fn test_bold_uses_terminal_styling() {
    let s = bold("PUNCHED IN");

    assert!(s.starts_with("\x1b[1m"), "{s:?}");
    assert_ne!(s, "PUNCHED IN");
    assert_eq!(strip_ansi(&s), "PUNCHED IN");
    assert_eq!(visible_width(&s), 10);
}

#[test]
fn test_padding_ignores_colour_codes() {
    let padded = pad_right(&bold("in"), 5);

    assert_eq!(strip_ansi(&padded), "in   ");
    assert_eq!(visible_width(&padded), 5);
}

#[test]
fn test_hours_readable() {
    assert_eq!(hours_readable(8.5), "08h 30m");
    assert_eq!(hours_readable(0.0), "00h 00m");
    assert_eq!(hours_readable(1.0 / 60.0 * 59.6), "01h 00m");
}

#[test]
fn test_progress_bar_is_clamped() {
    assert_eq!(progress_bar(0.5, 10), "[#####-----]  50%");
    assert_eq!(progress_bar(1.7, 4), "[####] 100%");
    assert_eq!(progress_bar(-0.2, 4), "[----]   0%");
}
