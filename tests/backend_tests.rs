use phdplanner::auth::AuthorizedClient;
use phdplanner::core::{CheckLogic, SheetState};
use phdplanner::errors::AppError;
use phdplanner::sheets::{BackendKind, CsvWorkbook, SqliteWorkbook, Workbook, open_workbook};
use phdplanner::store::schema::COL_ID;
use phdplanner::store::{Row, SheetStore, Table};
use std::fs;

#[test]
fn locator_selects_backend() {
    assert_eq!(BackendKind::from_locator("memory:"), BackendKind::Memory);
    assert_eq!(BackendKind::from_locator("/tmp/a.sqlite"), BackendKind::Sqlite);
    assert_eq!(BackendKind::from_locator("planner.DB"), BackendKind::Sqlite);
    assert_eq!(BackendKind::from_locator("/tmp/planner"), BackendKind::CsvDir);
    assert_eq!(
        BackendKind::from_locator("https://docs.google.com/spreadsheets/d/x"),
        BackendKind::Remote
    );
}

#[test]
fn sqlite_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planner.sqlite");

    {
        let mut store = SheetStore::open(Box::new(SqliteWorkbook::open(&path).unwrap())).unwrap();
        store
            .append(Table::Timeline, &Row::new().with(COL_ID, "1").with("Task", "GRE"))
            .unwrap();
    }

    let mut store = SheetStore::open(open_workbook(&path.to_string_lossy()).unwrap()).unwrap();
    let rows = store.list(Table::Timeline).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("Task"), "GRE");
}

#[test]
fn sqlite_missing_directory_is_unreachable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("planner.sqlite");
    assert!(matches!(
        SqliteWorkbook::open(&path),
        Err(AppError::BackendUnreachable { .. })
    ));
}

#[test]
fn sqlite_audits_mutations() {
    let mut store =
        SheetStore::open(Box::new(SqliteWorkbook::open_in_memory().unwrap())).unwrap();
    store
        .append(Table::Professors, &Row::new().with(COL_ID, "1"))
        .unwrap();
    store
        .update_by_id(Table::Professors, 1, &Row::new().with("Notes", "x"))
        .unwrap();
    store.delete_by_id(Table::Professors, 1).unwrap();

    let ops: Vec<String> = store
        .workbook()
        .audit_log()
        .unwrap()
        .unwrap()
        .into_iter()
        .map(|e| e.operation)
        .collect();

    assert!(ops.contains(&"migration_applied".to_string()));
    assert_eq!(ops.iter().filter(|o| *o == "create").count(), 4);
    for op in ["append", "update", "delete"] {
        assert!(ops.iter().any(|o| o == op), "missing {op} in {ops:?}");
    }
}

#[test]
fn sqlite_out_of_range_row() {
    let mut wb = SqliteWorkbook::open_in_memory().unwrap();
    wb.create_table("T", &["A".to_string()]).unwrap();
    assert!(matches!(
        wb.update_row("T", 0, &["x".to_string()]),
        Err(AppError::RowOutOfRange { .. })
    ));
    assert!(matches!(wb.rows("Nope"), Err(AppError::MissingTable(_))));
}

#[test]
fn csv_workbook_writes_one_file_per_table() {
    let dir = tempfile::tempdir().unwrap();
    let wb_dir = dir.path().join("planner");
    let mut store = SheetStore::open(Box::new(CsvWorkbook::open(&wb_dir).unwrap())).unwrap();

    for t in Table::ALL {
        assert!(wb_dir.join(format!("{}.csv", t.title())).exists());
    }

    store
        .append(
            Table::Communication,
            &Row::new()
                .with(COL_ID, "1")
                .with("Summary", "Asked about \"funding\", lab visit"),
        )
        .unwrap();

    let content = fs::read_to_string(wb_dir.join("Communication.csv")).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "ID,Timestamp,Date,Professor,Message Type,Summary,Next Action,Follow-up Date"
    );

    let rows = store.list(Table::Communication).unwrap();
    assert_eq!(rows[0].get("Summary"), "Asked about \"funding\", lab visit");
}

#[test]
fn csv_workbook_rejects_a_plain_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("planner");
    fs::write(&file, "x").unwrap();
    assert!(matches!(
        CsvWorkbook::open(&file),
        Err(AppError::BackendUnreachable { .. })
    ));
}

#[test]
fn memory_and_csv_keep_no_audit_log() {
    let dir = tempfile::tempdir().unwrap();
    let csv = CsvWorkbook::open(dir.path()).unwrap();
    assert!(csv.audit_log().unwrap().is_none());
    assert!(open_workbook("memory:").unwrap().audit_log().unwrap().is_none());
}

#[test]
fn check_inspects_without_repairing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planner.sqlite");
    {
        let wb = SqliteWorkbook::open(&path).unwrap();
        let mut store = SheetStore::open(Box::new(wb)).unwrap();
        store
            .append(Table::Professors, &Row::new().with(COL_ID, "1"))
            .unwrap();
        store
            .workbook_mut()
            .replace_header("Timeline", &["ID".to_string(), "When".to_string()])
            .unwrap();
    }

    let locator = path.to_string_lossy().to_string();
    let report = CheckLogic::run(&AuthorizedClient::anonymous(), &locator).unwrap();

    assert_eq!(report.backend, "sqlite");
    assert_eq!(report.project_id, None);
    assert!(report.worksheets.contains(&(Table::Professors, SheetState::Ok { rows: 1 })));
    assert!(
        report
            .worksheets
            .contains(&(Table::Timeline, SheetState::StaleHeader { rows: 0 }))
    );
    assert!(!report.is_healthy());

    // still stale: the check never writes
    let again = CheckLogic::run(&AuthorizedClient::anonymous(), &locator).unwrap();
    assert!(
        again
            .worksheets
            .contains(&(Table::Timeline, SheetState::StaleHeader { rows: 0 }))
    );
}

#[test]
fn check_on_fresh_memory_workbook() {
    let report = CheckLogic::run(&AuthorizedClient::anonymous(), "memory:").unwrap();
    assert_eq!(report.backend, "memory");
    assert!(report.worksheets.iter().all(|(_, s)| *s == SheetState::Missing));
}
