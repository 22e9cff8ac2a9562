// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod xlsx;

pub use logic::ExportLogic;
pub(crate) use fs_utils::{confirm_overwrite, ensure_parent_dir};

use crate::store::{Row, Table};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// A worksheet snapshot ready to be written out: header plus text rows in
/// column order.
#[derive(Debug, Clone)]
pub struct TableExport {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableExport {
    pub fn from_rows(table: Table, rows: &[Row]) -> Self {
        Self {
            title: table.title().to_string(),
            columns: table.header(),
            rows: rows.iter().map(|r| r.to_values(table.columns())).collect(),
        }
    }
}
