//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured on the visible text (ANSI colour codes stripped,
//! wide characters counted with `unicode-width`); long cells wrap inside
//! their column.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Terminal columns taken by `s`.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub struct Column {
    pub header: String,
    /// Cells wider than this wrap onto more lines.
    pub max_width: Option<usize>,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_headers(headers: &[&str]) -> Self {
        Self::new(
            headers
                .iter()
                .map(|h| Column {
                    header: h.to_string(),
                    max_width: None,
                })
                .collect(),
        )
    }

    /// Limit the width of the column titled `header`.
    pub fn limit(mut self, header: &str, width: usize) -> Self {
        if let Some(col) = self.columns.iter_mut().find(|c| c.header == header) {
            col.max_width = Some(width.max(1));
        }
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn cell_lines(&self, col: usize, value: &str) -> Vec<String> {
        match self.columns[col].max_width {
            Some(w) if visible_width(value) > w && !ANSI_RE.is_match(value) => {
                textwrap::wrap(value, w)
                    .into_iter()
                    .map(|l| l.into_owned())
                    .collect()
            }
            _ => vec![value.to_string()],
        }
    }

    /// Render header, separator line (made of `sep`) and rows.
    pub fn render(&self, sep: char) -> String {
        let wrapped: Vec<Vec<Vec<String>>> = self
            .rows
            .iter()
            .map(|row| {
                (0..self.columns.len())
                    .map(|i| self.cell_lines(i, row.get(i).map(String::as_str).unwrap_or("")))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                wrapped
                    .iter()
                    .flat_map(|cells| cells[i].iter())
                    .map(|l| visible_width(l))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        push_line(&mut out, &header, &widths);

        let total = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        out.push_str(&sep.to_string().repeat(total));
        out.push('\n');

        for cells in &wrapped {
            let height = cells.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                let parts: Vec<String> = cells
                    .iter()
                    .map(|c| c.get(line).cloned().unwrap_or_default())
                    .collect();
                push_line(&mut out, &parts, &widths);
            }
        }

        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, w)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(" | ");
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(w.saturating_sub(visible_width(cell))));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
