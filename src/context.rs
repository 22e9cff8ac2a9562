//! Per-invocation context: the clock and the workbook being worked on.
//!
//! Built once in `run()` from the configuration and handed down to every
//! command, so no code reads the system clock on its own.

use crate::errors::{AppError, AppResult};
use crate::utils::date::TIMESTAMP_FMT;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};

#[derive(Debug, Clone)]
pub struct RequestContext {
    now: DateTime<FixedOffset>,
    workbook: String,
    deadline_window_days: i64,
}

impl RequestContext {
    pub fn new(now: DateTime<FixedOffset>, workbook: impl Into<String>) -> Self {
        Self {
            now,
            workbook: workbook.into(),
            deadline_window_days: 30,
        }
    }

    /// Context for "right now" in the given UTC offset.
    pub fn at_offset(offset: FixedOffset, workbook: impl Into<String>) -> Self {
        Self::new(Utc::now().with_timezone(&offset), workbook)
    }

    /// Context pinned to midnight (UTC) of `date`.
    pub fn on_date(date: NaiveDate, workbook: impl Into<String>) -> Self {
        let now = date.and_time(NaiveTime::MIN).and_utc().with_timezone(&Utc.fix());
        Self::new(now, workbook)
    }

    pub fn with_deadline_window(mut self, days: i64) -> Self {
        self.deadline_window_days = days;
        self
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }

    /// Local calendar date of `now`.
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Creation timestamp as persisted in the `Timestamp` column.
    pub fn timestamp(&self) -> String {
        self.now.format(TIMESTAMP_FMT).to_string()
    }

    pub fn workbook(&self) -> &str {
        &self.workbook
    }

    pub fn deadline_window_days(&self) -> i64 {
        self.deadline_window_days
    }
}

/// Parse a `+HH:MM` / `-HH:MM` / `Z` offset.
pub fn parse_utc_offset(s: &str) -> AppResult<FixedOffset> {
    let invalid = || AppError::Config(format!("invalid utc_offset '{s}', expected e.g. +07:00"));
    let s = s.trim();

    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match s.chars().next() {
        Some('+') => (1, &s[1..]),
        Some('-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };

    let (h, m) = rest.split_once(':').unwrap_or((rest, "0"));
    let hours: i32 = h.parse().map_err(|_| invalid())?;
    let minutes: i32 = m.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
