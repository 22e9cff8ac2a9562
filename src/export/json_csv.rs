// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{TableExport, notify_export_success};
use crate::ui::messages::info;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed JSON: an array of objects keyed by column name, keys in
/// worksheet order.
pub(crate) fn export_json(data: &TableExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting {} to JSON: {}", data.title, path.display()));

    let records: Vec<Value> = data
        .rows
        .iter()
        .map(|row| {
            let obj: Map<String, Value> = data
                .columns
                .iter()
                .zip(row.iter())
                .map(|(c, v)| (c.clone(), Value::String(v.clone())))
                .collect();
            Value::Object(obj)
        })
        .collect();

    let json_data = serde_json::to_string_pretty(&records)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with the worksheet header as first record.
pub(crate) fn export_csv(data: &TableExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting {} to CSV: {}", data.title, path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(&data.columns)?;
    for row in &data.rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
