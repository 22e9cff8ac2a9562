pub mod backup;
pub mod check;
pub mod communication;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod init;
pub mod log;
pub mod professors;
pub mod scholarships;
pub mod timeline;

use crate::core::filter::StatusFilter;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::error;
use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// Strict `YYYY-MM-DD` argument.
pub(crate) fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub(crate) fn opt_date_arg(s: &Option<String>) -> AppResult<Option<NaiveDate>> {
    s.as_deref().map(parse_date_arg).transpose()
}

/// Date to store on edit: `Some(None)` clears, `None` keeps.
pub(crate) fn date_change(
    value: &Option<String>,
    clear: bool,
) -> AppResult<Option<Option<NaiveDate>>> {
    if clear {
        return Ok(Some(None));
    }
    Ok(opt_date_arg(value)?.map(Some))
}

/// Build a status filter from user input. Known labels are matched
/// case-insensitively and stored in their canonical spelling; anything else
/// is kept verbatim.
pub(crate) fn status_filter<F>(raw: &Option<String>, canonical: F) -> StatusFilter
where
    F: Fn(&str) -> Option<&'static str>,
{
    match raw.as_deref() {
        None => StatusFilter::All,
        Some(v) => match canonical(v) {
            Some(label) => StatusFilter::parse(Some(label)),
            None => StatusFilter::parse(Some(v)),
        },
    }
}

pub(crate) fn report_not_found(what: &str, id: i64) {
    error(format!("No {what} with ID {id}."));
}
