//! In-process workbook, mostly used by tests.

use super::{Workbook, table_not_found};
use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
struct Sheet {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    sheets: BTreeMap<String, Sheet>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a worksheet with an arbitrary header and raw rows.
    pub fn with_table(mut self, table: &str, header: &[&str], rows: Vec<Vec<&str>>) -> Self {
        let sheet = Sheet {
            header: header.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(str::to_string).collect())
                .collect(),
        };
        self.sheets.insert(table.to_string(), sheet);
        self
    }

    fn sheet_mut(&mut self, table: &str) -> AppResult<&mut Sheet> {
        self.sheets
            .get_mut(table)
            .ok_or_else(|| table_not_found(table))
    }
}

impl Workbook for MemoryWorkbook {
    fn locator(&self) -> &str {
        "memory:"
    }

    fn header(&self, table: &str) -> AppResult<Option<Vec<String>>> {
        Ok(self.sheets.get(table).map(|s| s.header.clone()))
    }

    fn create_table(&mut self, table: &str, header: &[String]) -> AppResult<()> {
        self.sheets.entry(table.to_string()).or_insert_with(|| Sheet {
            header: header.to_vec(),
            rows: Vec::new(),
        });
        Ok(())
    }

    fn replace_header(&mut self, table: &str, header: &[String]) -> AppResult<()> {
        self.sheet_mut(table)?.header = header.to_vec();
        Ok(())
    }

    fn rows(&self, table: &str) -> AppResult<Vec<Vec<String>>> {
        self.sheets
            .get(table)
            .map(|s| s.rows.clone())
            .ok_or_else(|| table_not_found(table))
    }

    fn append_row(&mut self, table: &str, values: &[String]) -> AppResult<()> {
        self.sheet_mut(table)?.rows.push(values.to_vec());
        Ok(())
    }

    fn update_row(&mut self, table: &str, index: usize, values: &[String]) -> AppResult<()> {
        let sheet = self.sheet_mut(table)?;
        let row = sheet
            .rows
            .get_mut(index)
            .ok_or_else(|| AppError::RowOutOfRange {
                table: table.to_string(),
                index,
            })?;
        *row = values.to_vec();
        Ok(())
    }

    fn delete_row(&mut self, table: &str, index: usize) -> AppResult<()> {
        let sheet = self.sheet_mut(table)?;
        if index >= sheet.rows.len() {
            return Err(AppError::RowOutOfRange {
                table: table.to_string(),
                index,
            });
        }
        sheet.rows.remove(index);
        Ok(())
    }
}
