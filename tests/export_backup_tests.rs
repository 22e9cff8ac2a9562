use phdplanner::core::ProfessorLogic;
use phdplanner::core::backup::BackupLogic;
use phdplanner::core::log::render_log;
use phdplanner::export::{ExportFormat, ExportLogic};
use phdplanner::models::Professor;
use phdplanner::sheets::{CsvWorkbook, SqliteWorkbook, Workbook};
use phdplanner::store::{SheetStore, Table};
use phdplanner::utils::table::strip_ansi;
use std::fs;

mod common;
use common::{ctx_on, memory_store};

fn seeded_store() -> SheetStore {
    let mut store = memory_store();
    let ctx = ctx_on("2025-01-01");
    for (name, country) in [("Dr. Smith", "Japan"), ("Dr. Müller", "Germany")] {
        ProfessorLogic::add(
            &mut store,
            &ctx,
            Professor {
                name: name.into(),
                country: country.into(),
                ..Professor::default()
            },
        )
        .unwrap();
    }
    store
}

#[test]
fn export_csv_has_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("profs.csv");
    let mut store = seeded_store();

    let n = ExportLogic::export(&mut store, Table::Professors, ExportFormat::Csv, &file, false)
        .unwrap();
    assert_eq!(n, 2);

    let content = fs::read_to_string(&file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ID,Timestamp,University,Country,Professor Name"));
    assert!(lines[2].contains("Dr. Müller"));
}

#[test]
fn export_json_objects_keyed_by_column() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("profs.json");
    let mut store = seeded_store();

    ExportLogic::export(&mut store, Table::Professors, ExportFormat::Json, &file, false).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    let arr = value.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["ID"], "1");
    assert_eq!(arr[0]["Professor Name"], "Dr. Smith");
    assert_eq!(arr[1]["Contact Status"], "Not Contacted");
    assert_eq!(arr[1]["Response Date"], "");
}

#[test]
fn export_xlsx_and_force_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("profs.xlsx");
    fs::write(&file, "old").unwrap();
    let mut store = seeded_store();

    ExportLogic::export(&mut store, Table::Professors, ExportFormat::Xlsx, &file, true).unwrap();

    let bytes = fs::read(&file).unwrap();
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn export_empty_table_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("nested").join("timeline.csv");
    let mut store = memory_store();

    let n = ExportLogic::export(&mut store, Table::Timeline, ExportFormat::Csv, &file, false)
        .unwrap();
    assert_eq!(n, 0);
    assert_eq!(
        fs::read_to_string(&file).unwrap().trim(),
        "ID,Timestamp,Date,Task,Status,Notes"
    );
}

#[test]
fn backup_sqlite_plain_and_compressed() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("planner.sqlite");
    {
        SheetStore::open(Box::new(SqliteWorkbook::open(&src).unwrap())).unwrap();
    }
    let locator = src.to_string_lossy().to_string();

    let plain = BackupLogic::backup(&locator, &dir.path().join("bk").join("copy.sqlite"), false, false)
        .unwrap()
        .unwrap();
    assert!(plain.exists());
    assert!(fs::metadata(&plain).unwrap().len() > 0);

    let zipped = BackupLogic::backup(&locator, &dir.path().join("copy.sqlite"), true, false)
        .unwrap()
        .unwrap();
    assert_eq!(zipped.extension().unwrap(), "zip");
    assert_eq!(&fs::read(&zipped).unwrap()[..2], b"PK");
}

#[test]
fn backup_csv_directory() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("planner");
    {
        SheetStore::open(Box::new(CsvWorkbook::open(&src).unwrap())).unwrap();
    }

    let out = BackupLogic::backup(&src.to_string_lossy(), &dir.path().join("backup"), false, false)
        .unwrap()
        .unwrap();
    for t in Table::ALL {
        assert!(out.join(format!("{}.csv", t.title())).exists());
    }
}

#[test]
fn backup_rejects_memory_workbook() {
    let dir = tempfile::tempdir().unwrap();
    assert!(BackupLogic::backup("memory:", &dir.path().join("x"), false, false).is_err());
}

#[test]
fn log_lines_show_operation_and_target() {
    let mut store =
        SheetStore::open(Box::new(SqliteWorkbook::open_in_memory().unwrap())).unwrap();
    ProfessorLogic::add(
        &mut store,
        &ctx_on("2025-01-01"),
        Professor {
            name: "Dr. Smith".into(),
            ..Professor::default()
        },
    )
    .unwrap();

    let entries = store.workbook().audit_log().unwrap().unwrap();
    let lines: Vec<String> = render_log(&entries).iter().map(|l| strip_ansi(l)).collect();

    assert!(lines.iter().any(|l| l.contains("append (Professors)") && l.contains("=> ID 1")));
    assert!(lines.iter().all(|l| l.contains(" | ")));
}
