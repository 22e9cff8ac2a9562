//! Storage schema of the SQLite workbook.
//!
//! These tables hold worksheets generically (header + JSON encoded rows);
//! the tracker columns themselves are never part of the SQL schema.

use rusqlite::{Connection, OptionalExtension, Result};

const WORKBOOK_SCHEMA_VERSION: &str = "20250901_0001_workbook_tables";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the worksheet container tables.
fn create_workbook_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS worksheets (
            title      TEXT PRIMARY KEY,
            header     TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS sheet_rows (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            worksheet TEXT NOT NULL REFERENCES worksheets(title) ON DELETE CASCADE,
            position  INTEGER NOT NULL,
            cells     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sheet_rows_ws_pos
            ON sheet_rows(worksheet, position);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: bring the storage schema up to date.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_workbook_tables(conn)?;

    if !migration_applied(conn, WORKBOOK_SCHEMA_VERSION)? {
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, 'Created workbook tables')",
            [WORKBOOK_SCHEMA_VERSION],
        )?;
        tracing::debug!(version = WORKBOOK_SCHEMA_VERSION, "workbook schema created");
    }

    Ok(())
}
