#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use phdplanner::context::RequestContext;
use phdplanner::sheets::{CsvWorkbook, MemoryWorkbook, SqliteWorkbook};
use phdplanner::store::SheetStore;
use std::path::Path;
use tempfile::TempDir;

/// The binary, isolated from the real home directory.
pub fn pp(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("phdplanner");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("PHDPLANNER_LOG");
    cmd
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

pub fn ctx_on(date: &str) -> RequestContext {
    RequestContext::on_date(d(date), "memory:")
}

pub fn memory_store() -> SheetStore {
    SheetStore::open(Box::new(MemoryWorkbook::new())).expect("memory store")
}

/// One store per backend kind: memory, SQLite file, CSV directory.
/// The returned directory must outlive the stores.
pub fn all_stores() -> (TempDir, Vec<(&'static str, SheetStore)>) {
    let dir = tempfile::tempdir().expect("tempdir");

    let sqlite = SqliteWorkbook::open(&dir.path().join("planner.sqlite")).expect("sqlite");
    let csv = CsvWorkbook::open(&dir.path().join("planner_csv")).expect("csv dir");

    let stores = vec![
        ("memory", memory_store()),
        ("sqlite", SheetStore::open(Box::new(sqlite)).expect("sqlite store")),
        ("csv", SheetStore::open(Box::new(csv)).expect("csv store")),
    ];

    (dir, stores)
}

/// Run `check` against every backend kind.
pub fn for_each_backend<F>(check: F)
where
    F: Fn(&str, &mut SheetStore),
{
    let (_dir, mut stores) = all_stores();
    for (name, store) in stores.iter_mut() {
        check(name, store);
    }
}
