//! Formatting utilities used for CLI output.

use ansi_term::Style;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Terminal columns taken by `s`, ignoring colour codes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// `08h 30m` from fractional hours, rounded to the minute.
pub fn hours_readable(hours: f64) -> String {
    let mins = (hours * 60.0).round() as i64;
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

/// `[#########-----------] 45%`
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        (ratio * 100.0).round() as u32
    )
}
