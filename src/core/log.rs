use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::{strip_ansi, visible_width};
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// Colour of an operation in the log listing.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "punch_in" => Colour::Green,
        "punch_out" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rendered: Vec<(String, String, String)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                let color = color_for_operation(&e.operation);
                let mut op_target = color.paint(e.operation.as_str()).to_string();
                if !e.target.is_empty() {
                    op_target.push_str(&format!(" ({})", e.target));
                }

                (date, truncate_visible(&op_target, color), e.message.clone())
            })
            .collect();

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rendered.iter().map(|(d, _, _)| d.len()).max().unwrap_or(10);
        let op_w = rendered
            .iter()
            .map(|(_, op, _)| visible_width(op))
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for (entry, (date, op_target, message)) in entries.iter().zip(rendered) {
            let padding = " ".repeat(op_w.saturating_sub(visible_width(&op_target)));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

/// Cut to `MAX_OP_WIDTH` visible characters, keeping only the operation
/// word coloured.
fn truncate_visible(colored: &str, color: Colour) -> String {
    let visible = strip_ansi(colored);
    if visible.chars().count() <= MAX_OP_WIDTH {
        return colored.to_string();
    }

    let mut cut: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
    cut.push_str("...");

    match cut.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(cut.as_str()).to_string(),
    }
}
