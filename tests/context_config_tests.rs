use phdplanner::config::Config;
use phdplanner::config::migrate::{fill_missing_keys, missing_keys};
use phdplanner::context::{RequestContext, parse_utc_offset};
use phdplanner::errors::AppError;
use std::fs;

mod common;
use common::d;

#[test]
fn utc_offset_parsing() {
    assert_eq!(parse_utc_offset("+07:00").unwrap().local_minus_utc(), 7 * 3600);
    assert_eq!(parse_utc_offset("-05:30").unwrap().local_minus_utc(), -(5 * 3600 + 30 * 60));
    assert_eq!(parse_utc_offset("Z").unwrap().local_minus_utc(), 0);
    assert!(matches!(parse_utc_offset("Asia/Bangkok"), Err(AppError::Config(_))));
    assert!(parse_utc_offset("+25:00").is_err());
}

#[test]
fn pinned_context() {
    let ctx = RequestContext::on_date(d("2025-01-01"), "memory:").with_deadline_window(14);
    assert_eq!(ctx.today(), d("2025-01-01"));
    assert_eq!(ctx.timestamp(), "2025-01-01 00:00:00");
    assert_eq!(ctx.workbook(), "memory:");
    assert_eq!(ctx.deadline_window_days(), 14);
}

#[test]
fn partial_config_takes_defaults() {
    let cfg = Config::parse("workbook: /tmp/planner.sqlite\n").unwrap();
    assert_eq!(cfg.workbook, "/tmp/planner.sqlite");
    assert_eq!(cfg.utc_offset, "+07:00");
    assert_eq!(cfg.deadline_window_days, 30);
    assert!(cfg.credentials.is_none());
}

#[test]
fn malformed_config_is_an_error() {
    assert!(matches!(
        Config::parse("deadline_window_days: [1, 2]\n"),
        Err(AppError::ConfigParse(_))
    ));
}

#[test]
fn resolve_workbook_keeps_special_locators() {
    assert_eq!(Config::resolve_workbook("memory:"), "memory:");
    assert_eq!(
        Config::resolve_workbook("https://docs.google.com/spreadsheets/d/x"),
        "https://docs.google.com/spreadsheets/d/x"
    );
    assert_eq!(Config::resolve_workbook("/abs/p.sqlite"), "/abs/p.sqlite");
}

#[test]
fn config_migration_fills_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("phdplanner.conf");
    fs::write(&path, "workbook: /data/planner.sqlite\ndeadline_window_days: 10\n").unwrap();

    let missing = missing_keys(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(missing, vec!["utc_offset", "separator_char"]);

    let added = fill_missing_keys(&path).unwrap();
    assert_eq!(added, vec!["utc_offset", "separator_char"]);

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.workbook, "/data/planner.sqlite");
    assert_eq!(cfg.deadline_window_days, 10);
    assert_eq!(cfg.utc_offset, "+07:00");

    assert!(fill_missing_keys(&path).unwrap().is_empty());
}
