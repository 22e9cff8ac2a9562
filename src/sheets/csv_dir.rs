//! Workbook stored as a directory of CSV files, one `<Table>.csv` per
//! worksheet. The first record of each file is the header row.
//!
//! Every mutation rewrites the file through a temporary sibling and a rename,
//! so a row is either fully written or not at all.

use super::{Workbook, table_not_found};
use crate::errors::{AppError, AppResult};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

pub struct CsvWorkbook {
    dir: PathBuf,
    locator: String,
}

impl CsvWorkbook {
    /// Open a workbook directory, creating it when missing.
    pub fn open(dir: &Path) -> AppResult<Self> {
        let locator = dir.to_string_lossy().to_string();

        if dir.exists() && !dir.is_dir() {
            return Err(AppError::BackendUnreachable {
                locator,
                reason: "not a directory".into(),
            });
        }

        fs::create_dir_all(dir).map_err(|e| AppError::BackendUnreachable {
            locator: locator.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            dir: dir.to_path_buf(),
            locator,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{table}.csv"))
    }

    /// Read every record of a worksheet, header included.
    fn read_all(&self, table: &str) -> AppResult<Option<Vec<Vec<String>>>> {
        let path = self.table_path(table);
        if !path.exists() {
            return Ok(None);
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)?;

        let mut out = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            out.push(rec.iter().map(str::to_string).collect());
        }
        Ok(Some(out))
    }

    fn read_existing(&self, table: &str) -> AppResult<Vec<Vec<String>>> {
        self.read_all(table)?.ok_or_else(|| table_not_found(table))
    }

    fn write_all(&self, table: &str, records: &[Vec<String>]) -> AppResult<()> {
        let path = self.table_path(table);
        let tmp = path.with_extension("csv.tmp");

        {
            let mut wtr = WriterBuilder::new().flexible(true).from_path(&tmp)?;
            for rec in records {
                wtr.write_record(rec)?;
            }
            wtr.flush()?;
        }

        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn out_of_range(table: &str, index: usize) -> AppError {
        AppError::RowOutOfRange {
            table: table.to_string(),
            index,
        }
    }
}

impl Workbook for CsvWorkbook {
    fn locator(&self) -> &str {
        &self.locator
    }

    fn header(&self, table: &str) -> AppResult<Option<Vec<String>>> {
        Ok(self
            .read_all(table)?
            .map(|records| records.into_iter().next().unwrap_or_default()))
    }

    fn create_table(&mut self, table: &str, header: &[String]) -> AppResult<()> {
        if self.table_path(table).exists() {
            return Ok(());
        }
        self.write_all(table, &[header.to_vec()])
    }

    fn replace_header(&mut self, table: &str, header: &[String]) -> AppResult<()> {
        let mut records = self.read_existing(table)?;
        match records.first_mut() {
            Some(first) => *first = header.to_vec(),
            None => records.push(header.to_vec()),
        }
        self.write_all(table, &records)
    }

    fn rows(&self, table: &str) -> AppResult<Vec<Vec<String>>> {
        Ok(self.read_existing(table)?.into_iter().skip(1).collect())
    }

    fn append_row(&mut self, table: &str, values: &[String]) -> AppResult<()> {
        let mut records = self.read_existing(table)?;
        if records.is_empty() {
            records.push(Vec::new());
        }
        records.push(values.to_vec());
        self.write_all(table, &records)
    }

    fn update_row(&mut self, table: &str, index: usize, values: &[String]) -> AppResult<()> {
        let mut records = self.read_existing(table)?;
        let row = records
            .get_mut(index + 1)
            .ok_or_else(|| Self::out_of_range(table, index))?;
        *row = values.to_vec();
        self.write_all(table, &records)
    }

    fn delete_row(&mut self, table: &str, index: usize) -> AppResult<()> {
        let mut records = self.read_existing(table)?;
        if index + 1 >= records.len() {
            return Err(Self::out_of_range(table, index));
        }
        records.remove(index + 1);
        self.write_all(table, &records)
    }
}
