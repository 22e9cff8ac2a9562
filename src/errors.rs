//! Unified application error type.
//! All modules (sheets, store, core, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Backend-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot reach workbook '{locator}': {reason}")]
    BackendUnreachable { locator: String, reason: String },

    #[error("Worksheet not found: {0}")]
    MissingTable(String),

    #[error("No identifier left in worksheet {0}: the largest ID is already the maximum")]
    IdExhausted(String),

    #[error("Row {index} out of range in worksheet {table}")]
    RowOutOfRange { table: String, index: usize },

    // ---------------------------
    // Authentication
    // ---------------------------
    #[error("Authentication failed: {0}")]
    Auth(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid message type: {0}")]
    InvalidMessageType(String),

    #[error("Unknown table: {0}")]
    InvalidTable(String),

    #[error("Missing required value: --{0}")]
    MissingArgument(&'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
