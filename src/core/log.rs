use crate::errors::AppResult;
use crate::sheets::{LogEntry, Workbook};
use crate::ui::messages::{info, warning};
use crate::utils::formatting::truncate;
use crate::utils::table::visible_width;
use ansi_term::Colour;

/// Widest operation/target column before truncation.
const OP_MAX: usize = 40;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "append" => Colour::Green,
        "delete" => Colour::Red,
        "update" => Colour::Yellow,
        "header-repair" => Colour::Purple,
        "create" | "init" => Colour::RGB(255, 153, 51),
        "backup" | "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Print the audit trail of `workbook`, oldest first.
    pub fn print_log(workbook: &dyn Workbook) -> AppResult<()> {
        let Some(entries) = workbook.audit_log()? else {
            warning(format!(
                "The workbook '{}' does not keep an audit log.",
                workbook.locator()
            ));
            return Ok(());
        };

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        for line in render_log(&entries) {
            println!("{line}");
        }
        Ok(())
    }
}

/// One formatted line per entry: `id: date | op (target) => message`, with
/// the operation coloured.
pub fn render_log(entries: &[LogEntry]) -> Vec<String> {
    let rows: Vec<(i64, String, String, String, &str)> = entries
        .iter()
        .map(|e| {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| e.date.clone());

            let rest = if e.target.is_empty() {
                String::new()
            } else {
                truncate(
                    &format!(" ({})", e.target),
                    OP_MAX.saturating_sub(e.operation.chars().count()),
                )
            };

            (e.id, date, e.operation.clone(), rest, e.message.as_str())
        })
        .collect();

    let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
    let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
    let op_w = rows
        .iter()
        .map(|r| r.2.chars().count() + r.3.chars().count())
        .max()
        .unwrap_or(10)
        .min(OP_MAX);

    rows.iter()
        .map(|(id, date, op, rest, message)| {
            let colored = format!("{}{}", color_for_operation(op).paint(op.as_str()), rest);
            let padding = " ".repeat(op_w.saturating_sub(visible_width(&colored)));
            format!("{id:>id_w$}: {date:<date_w$} | {colored}{padding} => {message}")
        })
        .collect()
}
