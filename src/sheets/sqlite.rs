//! Workbook stored in a single SQLite file.
//!
//! Every worksheet is a row of `worksheets` (title + JSON header) and its data
//! rows live in `sheet_rows`, ordered by `position`. Positions are kept dense
//! (0..n) so that a data row index maps directly to a position.

use super::log::{LogEntry, load_log, ttlog};
use super::migrate::run_pending_migrations;
use super::{Workbook, table_not_found};
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};

pub struct SqliteWorkbook {
    conn: Connection,
    locator: String,
    path: Option<PathBuf>,
}

impl SqliteWorkbook {
    /// Open (or create) a workbook file and bring its schema up to date.
    pub fn open(path: &Path) -> AppResult<Self> {
        let locator = path.to_string_lossy().to_string();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(AppError::BackendUnreachable {
                locator,
                reason: format!("directory {} does not exist", parent.display()),
            });
        }

        let conn = Connection::open(path).map_err(|e| AppError::BackendUnreachable {
            locator: locator.clone(),
            reason: e.to_string(),
        })?;
        run_pending_migrations(&conn)?;

        Ok(Self {
            conn,
            locator,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a throwaway workbook (for testing)
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self {
            conn,
            locator: ":memory:".to_string(),
            path: None,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Entries of the internal audit log, oldest first.
    pub fn log_entries(&self) -> AppResult<Vec<LogEntry>> {
        load_log(&self.conn)
    }

    fn ensure_exists(&self, table: &str) -> AppResult<()> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM worksheets WHERE title = ?1",
                [table],
                |row| row.get(0),
            )
            .optional()?;
        match found {
            Some(_) => Ok(()),
            None => Err(table_not_found(table)),
        }
    }

    fn row_count(&self, table: &str) -> AppResult<usize> {
        let n: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sheet_rows WHERE worksheet = ?1",
            [table],
            |row| row.get(0),
        )?;
        Ok(n as usize)
    }

    fn out_of_range(table: &str, index: usize) -> AppError {
        AppError::RowOutOfRange {
            table: table.to_string(),
            index,
        }
    }
}

impl Workbook for SqliteWorkbook {
    fn locator(&self) -> &str {
        &self.locator
    }

    fn header(&self, table: &str) -> AppResult<Option<Vec<String>>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT header FROM worksheets WHERE title = ?1",
                [table],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn create_table(&mut self, table: &str, header: &[String]) -> AppResult<()> {
        let json = serde_json::to_string(header)?;
        self.conn.execute(
            "INSERT OR IGNORE INTO worksheets (title, header, created_at) VALUES (?1, ?2, ?3)",
            params![table, json, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn replace_header(&mut self, table: &str, header: &[String]) -> AppResult<()> {
        let json = serde_json::to_string(header)?;
        let changed = self.conn.execute(
            "UPDATE worksheets SET header = ?1 WHERE title = ?2",
            params![json, table],
        )?;
        if changed == 0 {
            return Err(table_not_found(table));
        }
        Ok(())
    }

    fn rows(&self, table: &str) -> AppResult<Vec<Vec<String>>> {
        self.ensure_exists(table)?;

        let mut stmt = self.conn.prepare_cached(
            "SELECT cells FROM sheet_rows
             WHERE worksheet = ?1
             ORDER BY position ASC",
        )?;
        let rows = stmt.query_map([table], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(serde_json::from_str(&r?)?);
        }
        Ok(out)
    }

    fn append_row(&mut self, table: &str, values: &[String]) -> AppResult<()> {
        self.ensure_exists(table)?;
        let json = serde_json::to_string(values)?;
        self.conn.execute(
            "INSERT INTO sheet_rows (worksheet, position, cells)
             VALUES (?1, (SELECT IFNULL(MAX(position), -1) + 1 FROM sheet_rows WHERE worksheet = ?1), ?2)",
            params![table, json],
        )?;
        Ok(())
    }

    fn update_row(&mut self, table: &str, index: usize, values: &[String]) -> AppResult<()> {
        self.ensure_exists(table)?;
        let json = serde_json::to_string(values)?;
        let changed = self.conn.execute(
            "UPDATE sheet_rows SET cells = ?1 WHERE worksheet = ?2 AND position = ?3",
            params![json, table, index as i64],
        )?;
        if changed == 0 {
            return Err(Self::out_of_range(table, index));
        }
        Ok(())
    }

    fn delete_row(&mut self, table: &str, index: usize) -> AppResult<()> {
        self.ensure_exists(table)?;
        if index >= self.row_count(table)? {
            return Err(Self::out_of_range(table, index));
        }

        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM sheet_rows WHERE worksheet = ?1 AND position = ?2",
            params![table, index as i64],
        )?;
        tx.execute(
            "UPDATE sheet_rows SET position = position - 1
             WHERE worksheet = ?1 AND position > ?2",
            params![table, index as i64],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.conn, operation, target, message)
    }

    fn audit_log(&self) -> AppResult<Option<Vec<LogEntry>>> {
        Ok(Some(self.log_entries()?))
    }
}
