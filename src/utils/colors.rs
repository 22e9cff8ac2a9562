/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Colour of a status label, by the progress it stands for.
pub fn color_for_status(status: &str) -> &'static str {
    match status {
        "Not Contacted" | "To Explore" | "Pending" => GREY,
        "Contacted" | "Applied" | "In Progress" => YELLOW,
        "Replied" | "Shortlisted" => CYAN,
        "Ongoing" | "On Hold" => MAGENTA,
        "Accepted" | "Completed" => GREEN,
        "Closed" | "Rejected" => RED,
        _ => RESET,
    }
}

pub fn colorize_status(status: &str) -> String {
    format!("{}{status}{RESET}", color_for_status(status))
}

/// Grey for empty values, unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}-{RESET}")
    } else {
        value.to_string()
    }
}

/// Red when overdue, yellow inside the window, plain otherwise.
pub fn colorize_deadline(value: &str, days_left: Option<i64>, window: i64) -> String {
    match days_left {
        Some(d) if d < 0 => format!("{RED}{value}{RESET}"),
        Some(d) if d <= window => format!("{YELLOW}{value}{RESET}"),
        Some(_) => value.to_string(),
        None => colorize_optional(value),
    }
}
