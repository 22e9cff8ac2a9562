//! Schema-enforced CRUD over the planner worksheets.
//!
//! `SheetStore` knows the fixed column layout of every table, assigns
//! identifiers and converts between positional backend rows and [`Row`]
//! mappings. It keeps no state besides the workbook handle: every call reads
//! the backend again.

pub mod record;
pub mod row;
pub mod schema;

pub use record::Record;
pub use row::{Row, coerce_id, parse_id};
pub use schema::Table;

use crate::errors::{AppError, AppResult};
use crate::sheets::Workbook;
use schema::COL_ID;

/// Outcome of [`SheetStore::ensure_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Unchanged,
    Created,
    Repaired,
}

pub struct SheetStore {
    workbook: Box<dyn Workbook>,
}

impl SheetStore {
    /// Wrap a workbook without touching it.
    pub fn new(workbook: Box<dyn Workbook>) -> Self {
        Self { workbook }
    }

    /// Wrap a workbook and make sure all planner tables exist with the
    /// expected header.
    pub fn open(workbook: Box<dyn Workbook>) -> AppResult<Self> {
        let mut store = Self::new(workbook);
        for table in Table::ALL {
            store.ensure_table(table.title(), table.columns())?;
        }
        Ok(store)
    }

    pub fn workbook(&self) -> &dyn Workbook {
        self.workbook.as_ref()
    }

    pub fn workbook_mut(&mut self) -> &mut dyn Workbook {
        self.workbook.as_mut()
    }

    /// Open or create a worksheet. A header that differs from `columns` is
    /// overwritten; data rows are left alone even if they no longer line up.
    pub fn ensure_table(&mut self, name: &str, columns: &[&str]) -> AppResult<HeaderState> {
        let expected: Vec<String> = columns.iter().map(|c| c.to_string()).collect();

        match self.workbook.header(name)? {
            None => {
                self.workbook.create_table(name, &expected)?;
                self.audit("create", name, "Worksheet created");
                tracing::debug!(table = name, "worksheet created");
                Ok(HeaderState::Created)
            }
            Some(header) if header == expected => Ok(HeaderState::Unchanged),
            Some(header) => {
                self.workbook.replace_header(name, &expected)?;
                self.audit(
                    "header-repair",
                    name,
                    &format!("Header replaced (had {} columns)", header.len()),
                );
                tracing::debug!(table = name, found = ?header, "header repaired");
                Ok(HeaderState::Repaired)
            }
        }
    }

    fn ensure(&mut self, table: Table) -> AppResult<()> {
        self.ensure_table(table.title(), table.columns())?;
        Ok(())
    }

    /// All rows of `table` in store order.
    pub fn list(&mut self, table: Table) -> AppResult<Vec<Row>> {
        self.ensure(table)?;
        let columns = table.columns();
        Ok(self
            .workbook
            .rows(table.title())?
            .iter()
            .map(|values| Row::from_values(columns, values))
            .collect())
    }

    /// Highest `ID` currently stored plus one (1 for an empty table).
    pub fn next_id(&mut self, table: Table) -> AppResult<i64> {
        let rows = self.list(table)?;
        next_id_of(&rows).ok_or_else(|| AppError::IdExhausted(table.title().to_string()))
    }

    /// Append one row in column order; missing fields are written empty.
    pub fn append(&mut self, table: Table, row: &Row) -> AppResult<()> {
        self.ensure(table)?;
        let values = row.to_values(table.columns());
        self.workbook.append_row(table.title(), &values)?;
        self.audit("append", table.title(), &format!("ID {}", row.get(COL_ID)));
        tracing::debug!(table = table.title(), id = row.get(COL_ID), "row appended");
        Ok(())
    }

    /// Overwrite the first row whose `ID` equals `id`.
    ///
    /// Returns `false` when no row carries that identifier. A `row` without
    /// an `ID` field keeps the existing identifier.
    pub fn update_by_id(&mut self, table: Table, id: i64, row: &Row) -> AppResult<bool> {
        let rows = self.list(table)?;
        let Some(index) = position_of(&rows, id) else {
            tracing::debug!(table = table.title(), id, "update target not found");
            return Ok(false);
        };

        let mut row = row.clone();
        if !row.contains(COL_ID) {
            row.set(COL_ID, id.to_string());
        }

        let values = row.to_values(table.columns());
        self.workbook.update_row(table.title(), index, &values)?;
        self.audit("update", table.title(), &format!("ID {id}"));
        tracing::debug!(table = table.title(), id, index, "row updated");
        Ok(true)
    }

    /// Remove the first row whose `ID` equals `id`.
    pub fn delete_by_id(&mut self, table: Table, id: i64) -> AppResult<bool> {
        let rows = self.list(table)?;
        let Some(index) = position_of(&rows, id) else {
            tracing::debug!(table = table.title(), id, "delete target not found");
            return Ok(false);
        };

        self.workbook.delete_row(table.title(), index)?;
        self.audit("delete", table.title(), &format!("ID {id}"));
        tracing::debug!(table = table.title(), id, index, "row deleted");
        Ok(true)
    }

    // ========== Typed access ==========

    pub fn list_records<R: Record>(&mut self) -> AppResult<Vec<R>> {
        Ok(self.list(R::TABLE)?.iter().map(R::from_row).collect())
    }

    pub fn find_by_id<R: Record>(&mut self, id: i64) -> AppResult<Option<R>> {
        let rows = self.list(R::TABLE)?;
        Ok(position_of(&rows, id).map(|i| R::from_row(&rows[i])))
    }

    /// Assign the next identifier to `record`, append it and return it.
    pub fn insert<R: Record>(&mut self, mut record: R) -> AppResult<R> {
        let id = self.next_id(R::TABLE)?;
        record.set_id(id);
        self.append(R::TABLE, &record.to_row())?;
        Ok(record)
    }

    pub fn update_record<R: Record>(&mut self, record: &R) -> AppResult<bool> {
        self.update_by_id(R::TABLE, record.id(), &record.to_row())
    }

    pub fn delete<R: Record>(&mut self, id: i64) -> AppResult<bool> {
        self.delete_by_id(R::TABLE, id)
    }

    pub fn audit(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.workbook.audit(operation, target, message) {
            tracing::warn!(operation, target, error = %e, "failed to write audit log");
        }
    }
}

/// Max coerced `ID` plus one; 1 when `rows` is empty. `None` once the
/// largest ID is `i64::MAX`.
pub fn next_id_of(rows: &[Row]) -> Option<i64> {
    rows.iter()
        .map(|r| coerce_id(r.get(COL_ID)))
        .max()
        .unwrap_or(0)
        .checked_add(1)
}

fn position_of(rows: &[Row], id: i64) -> Option<usize> {
    rows.iter().position(|r| r.id() == Some(id))
}
