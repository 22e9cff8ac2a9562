//! Tabular backends ("workbooks") holding named worksheets.
//!
//! A workbook only knows about worksheets made of a header row and data rows
//! of plain strings. Schema, identifiers and typing live one level up, in
//! [`crate::store`].

pub mod csv_dir;
pub mod log;
pub mod memory;
pub mod migrate;
pub mod sqlite;

pub use csv_dir::CsvWorkbook;
pub use log::LogEntry;
pub use memory::MemoryWorkbook;
pub use sqlite::SqliteWorkbook;

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;

/// Minimal contract the store needs from a tabular backend.
///
/// Row indexes are 0-based positions among the data rows (the header is not
/// counted).
pub trait Workbook {
    /// Human readable address of this workbook (path, `memory:`...).
    fn locator(&self) -> &str;

    /// Header row of `table`, or `None` when the worksheet does not exist.
    fn header(&self, table: &str) -> AppResult<Option<Vec<String>>>;

    fn create_table(&mut self, table: &str, header: &[String]) -> AppResult<()>;

    /// Overwrite the header row only. Data rows are left as they are.
    fn replace_header(&mut self, table: &str, header: &[String]) -> AppResult<()>;

    /// All data rows in store order.
    fn rows(&self, table: &str) -> AppResult<Vec<Vec<String>>>;

    fn append_row(&mut self, table: &str, values: &[String]) -> AppResult<()>;

    /// Replace a whole data row in a single write.
    fn update_row(&mut self, table: &str, index: usize, values: &[String]) -> AppResult<()>;

    fn delete_row(&mut self, table: &str, index: usize) -> AppResult<()>;

    /// Record an operation in the backend's audit trail, if it keeps one.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }

    /// The audit trail, or `None` for backends that do not keep one.
    fn audit_log(&self) -> AppResult<Option<Vec<LogEntry>>> {
        Ok(None)
    }
}

/// Kind of backend selected by a locator string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Memory,
    Sqlite,
    CsvDir,
    Remote,
}

impl BackendKind {
    pub fn from_locator(locator: &str) -> Self {
        let lower = locator.trim().to_lowercase();
        if lower.starts_with("memory:") {
            BackendKind::Memory
        } else if lower.starts_with("http://") || lower.starts_with("https://") {
            BackendKind::Remote
        } else if lower.ends_with(".sqlite") || lower.ends_with(".db") {
            BackendKind::Sqlite
        } else {
            BackendKind::CsvDir
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Memory => "memory",
            BackendKind::Sqlite => "sqlite",
            BackendKind::CsvDir => "csv",
            BackendKind::Remote => "remote",
        }
    }
}

/// Open the workbook addressed by `locator`.
pub fn open_workbook(locator: &str) -> AppResult<Box<dyn Workbook>> {
    let kind = BackendKind::from_locator(locator);
    tracing::debug!(locator, backend = kind.as_str(), "opening workbook");

    match kind {
        BackendKind::Memory => Ok(Box::new(MemoryWorkbook::new())),
        BackendKind::Sqlite => {
            let path = expand_tilde(locator);
            Ok(Box::new(SqliteWorkbook::open(&path)?))
        }
        BackendKind::CsvDir => {
            let path = expand_tilde(locator);
            Ok(Box::new(CsvWorkbook::open(&path)?))
        }
        BackendKind::Remote => Err(AppError::BackendUnreachable {
            locator: locator.to_string(),
            reason: "remote spreadsheets are not supported by this build; use a .sqlite file or a directory".into(),
        }),
    }
}

pub(crate) fn table_not_found(table: &str) -> AppError {
    AppError::MissingTable(table.to_string())
}
