use phdplanner::errors::AppError;
use phdplanner::models::TimelineTask;
use phdplanner::sheets::{MemoryWorkbook, Workbook};
use phdplanner::store::schema::COL_ID;
use phdplanner::store::{HeaderState, Row, SheetStore, Table, parse_id};

mod common;
use common::for_each_backend;

fn prof(id: &str, name: &str) -> Row {
    Row::new()
        .with(COL_ID, id)
        .with("Professor Name", name)
        .with("Contact Status", "Not Contacted")
}

fn ids(store: &mut SheetStore, table: Table) -> Vec<String> {
    store
        .list(table)
        .unwrap()
        .iter()
        .map(|r| r.get(COL_ID).to_string())
        .collect()
}

#[test]
fn next_id_starts_at_one() {
    for_each_backend(|name, store| {
        assert_eq!(store.next_id(Table::Timeline).unwrap(), 1, "{name}");
    });
}

#[test]
fn next_id_is_max_plus_one() {
    for_each_backend(|name, store| {
        for id in ["1", "2", "5"] {
            store.append(Table::Professors, &prof(id, "X")).unwrap();
        }
        assert_eq!(store.next_id(Table::Professors).unwrap(), 6, "{name}");
    });
}

#[test]
fn next_id_ignores_blank_and_text_ids() {
    for_each_backend(|name, store| {
        store.append(Table::Professors, &prof("", "blank")).unwrap();
        store.append(Table::Professors, &prof("abc", "text")).unwrap();
        store.append(Table::Professors, &prof("3.0", "float")).unwrap();
        assert_eq!(store.next_id(Table::Professors).unwrap(), 4, "{name}");
    });
}

#[test]
fn next_id_skips_out_of_range_ids() {
    for_each_backend(|name, store| {
        store.append(Table::Timeline, &Row::new().with(COL_ID, "1e30")).unwrap();
        store.append(Table::Timeline, &Row::new().with(COL_ID, "7")).unwrap();
        assert_eq!(store.next_id(Table::Timeline).unwrap(), 8, "{name}");
    });
}

#[test]
fn next_id_fails_cleanly_at_the_maximum() {
    for_each_backend(|name, store| {
        let max = i64::MAX.to_string();
        store.append(Table::Timeline, &Row::new().with(COL_ID, max.as_str())).unwrap();

        assert!(
            matches!(store.next_id(Table::Timeline), Err(AppError::IdExhausted(_))),
            "{name}"
        );
        assert!(store.insert(TimelineTask::default()).is_err(), "{name}");
        assert_eq!(store.list(Table::Timeline).unwrap().len(), 1, "{name}");
    });
}

#[test]
fn update_missing_id_returns_false() {
    for_each_backend(|name, store| {
        store.append(Table::Professors, &prof("1", "A")).unwrap();
        let before = store.list(Table::Professors).unwrap();

        let changed = store
            .update_by_id(Table::Professors, 42, &prof("42", "Z"))
            .unwrap();

        assert!(!changed, "{name}");
        assert_eq!(store.list(Table::Professors).unwrap(), before, "{name}");
    });
}

#[test]
fn update_replaces_the_whole_row() {
    for_each_backend(|name, store| {
        store.append(Table::Professors, &prof("1", "A")).unwrap();
        store.append(Table::Professors, &prof("2", "B")).unwrap();

        let new_row = Row::new()
            .with("Professor Name", "B2")
            .with("Contact Status", "Replied");
        assert!(store.update_by_id(Table::Professors, 2, &new_row).unwrap(), "{name}");

        let rows = store.list(Table::Professors).unwrap();
        assert_eq!(rows[1].get(COL_ID), "2", "{name}: id kept");
        assert_eq!(rows[1].get("Professor Name"), "B2", "{name}");
        assert_eq!(rows[1].get("Contact Status"), "Replied", "{name}");
        assert_eq!(rows[1].get("Notes"), "", "{name}");
        assert_eq!(rows[0].get("Professor Name"), "A", "{name}");
    });
}

#[test]
fn delete_removes_first_match_only() {
    for_each_backend(|name, store| {
        for (id, n) in [("1", "a"), ("2", "first"), ("2", "second"), ("3", "c")] {
            store.append(Table::Professors, &prof(id, n)).unwrap();
        }

        assert!(store.delete_by_id(Table::Professors, 2).unwrap(), "{name}");

        let rows = store.list(Table::Professors).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.get("Professor Name")).collect();
        assert_eq!(names, vec!["a", "second", "c"], "{name}");

        assert!(!store.delete_by_id(Table::Professors, 99).unwrap(), "{name}");
        assert_eq!(ids(store, Table::Professors), vec!["1", "2", "3"], "{name}");
    });
}

#[test]
fn append_then_read_back() {
    for_each_backend(|name, store| {
        let row = Row::new()
            .with(COL_ID, "7")
            .with("Task", "Write proposal, draft 1")
            .with("Status", "Pending");
        store.append(Table::Timeline, &row).unwrap();

        let rows = store.list(Table::Timeline).unwrap();
        assert_eq!(rows.len(), 1, "{name}");
        for col in Table::Timeline.columns() {
            assert_eq!(rows[0].get(col), row.get(col), "{name}: column {col}");
        }
        assert_eq!(rows[0].get("Notes"), "", "{name}");
        assert_eq!(rows[0].get("Date"), "", "{name}");
    });
}

#[test]
fn header_repair_keeps_data_rows() {
    let wb = MemoryWorkbook::new().with_table(
        "Professors",
        &["ID", "Name"],
        vec![vec!["1", "Dr. Old"], vec!["2", "Dr. Older"]],
    );
    let mut store = SheetStore::new(Box::new(wb));

    let state = store
        .ensure_table("Professors", Table::Professors.columns())
        .unwrap();
    assert_eq!(state, HeaderState::Repaired);

    let header = store.workbook().header("Professors").unwrap().unwrap();
    assert_eq!(header, Table::Professors.header());

    let raw = store.workbook().rows("Professors").unwrap();
    assert_eq!(raw, vec![vec!["1", "Dr. Old"], vec!["2", "Dr. Older"]]);

    let again = store
        .ensure_table("Professors", Table::Professors.columns())
        .unwrap();
    assert_eq!(again, HeaderState::Unchanged);
}

#[test]
fn header_repair_on_file_backends() {
    for_each_backend(|name, store| {
        let wrong: Vec<String> = vec!["ID".into(), "Something".into()];
        store.workbook_mut().create_table("Extra", &wrong).unwrap();
        store
            .workbook_mut()
            .append_row("Extra", &["1".to_string(), "kept".to_string()])
            .unwrap();

        let state = store.ensure_table("Extra", &["ID", "Task", "Status"]).unwrap();
        assert_eq!(state, HeaderState::Repaired, "{name}");

        let header = store.workbook().header("Extra").unwrap().unwrap();
        assert_eq!(header, vec!["ID", "Task", "Status"], "{name}");
        assert_eq!(
            store.workbook().rows("Extra").unwrap(),
            vec![vec!["1", "kept"]],
            "{name}"
        );
    });
}

#[test]
fn missing_table_is_created_on_demand() {
    let mut store = SheetStore::new(Box::new(MemoryWorkbook::new()));
    assert!(store.workbook().header("Timeline").unwrap().is_none());

    assert!(store.list(Table::Timeline).unwrap().is_empty());
    assert_eq!(
        store.workbook().header("Timeline").unwrap().unwrap(),
        Table::Timeline.header()
    );
}

#[test]
fn parse_id_accepts_integral_text() {
    assert_eq!(parse_id("3"), Some(3));
    assert_eq!(parse_id(" 12 "), Some(12));
    assert_eq!(parse_id("4.0"), Some(4));
    assert_eq!(parse_id(""), None);
    assert_eq!(parse_id("n/a"), None);
    assert_eq!(parse_id("1e30"), None);
    assert_eq!(parse_id("-1e30"), None);
    assert_eq!(parse_id("9223372036854775807"), Some(i64::MAX));
}

#[test]
fn table_titles_resolve_case_insensitively() {
    assert_eq!(Table::from_title("professors").unwrap(), Table::Professors);
    assert_eq!(Table::from_title(" Timeline ").unwrap(), Table::Timeline);
    assert!(Table::from_title("Grants").is_err());
}
