// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, TableExport};
use crate::store::{SheetStore, Table};
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write every row of `table` to `file`.
    ///
    /// An existing file is only replaced with `force` or after confirmation.
    /// Returns the number of exported rows.
    pub fn export(
        store: &mut SheetStore,
        table: Table,
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(file, force)?;
        ensure_parent_dir(file)?;

        let rows = store.list(table)?;
        if rows.is_empty() {
            warning(format!("No rows in {table}; writing header only."));
        }

        let data = TableExport::from_rows(table, &rows);
        tracing::debug!(table = table.title(), format = format.as_str(), rows = rows.len(), "export");

        match format {
            ExportFormat::Csv => export_csv(&data, file)?,
            ExportFormat::Json => export_json(&data, file)?,
            ExportFormat::Xlsx => export_xlsx(&data, file)?,
        }

        store.audit("export", table.title(), &format!("{} rows to {}", rows.len(), file.display()));
        Ok(rows.len())
    }
}
