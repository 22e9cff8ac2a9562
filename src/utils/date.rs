use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const DATE_FMT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Strict `YYYY-MM-DD` parsing, used for user input.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

/// Best-effort parsing of a date cell.
///
/// Accepts plain dates in a few common spellings, timestamps and RFC 3339.
/// Empty or unreadable input yields `None`.
pub fn parse_date_loose(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in [DATE_FMT, "%Y/%m/%d", "%d/%m/%Y", "%Y.%m.%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    for fmt in [TIMESTAMP_FMT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

/// `YYYY-MM-DD`, or the empty string for "no date".
pub fn format_opt_date(d: Option<NaiveDate>) -> String {
    d.map(|d| format_date(&d)).unwrap_or_default()
}
