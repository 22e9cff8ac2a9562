//! Cell values that keep the text they were read from.
//!
//! Worksheets can be edited by hand, so a status cell may hold something
//! that is not one of the known labels and a date cell may not parse.
//! Both types below hold on to the stored text and write it back unchanged.

use crate::utils::date::{format_opt_date, parse_date_loose};
use chrono::NaiveDate;
use std::fmt;

/// Enumerations persisted as one of a fixed set of labels.
pub trait SheetEnum: Copy + Default + PartialEq + 'static {
    fn label(self) -> &'static str;

    /// Exact, case-sensitive lookup of a stored label.
    fn from_label(s: &str) -> Option<Self>;
}

/// An enumerated cell: a known label, or the stored text kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label<T> {
    Known(T),
    Other(String),
}

impl<T: SheetEnum> Label<T> {
    pub fn from_cell(raw: &str) -> Self {
        match T::from_label(raw) {
            Some(v) => Label::Known(v),
            None => Label::Other(raw.to_string()),
        }
    }

    /// The persisted text.
    pub fn as_str(&self) -> &str {
        match self {
            Label::Known(v) => v.label(),
            Label::Other(s) => s,
        }
    }

    pub fn known(&self) -> Option<T> {
        match self {
            Label::Known(v) => Some(*v),
            Label::Other(_) => None,
        }
    }
}

impl<T: SheetEnum> Default for Label<T> {
    fn default() -> Self {
        Label::Known(T::default())
    }
}

impl<T> From<T> for Label<T> {
    fn from(v: T) -> Self {
        Label::Known(v)
    }
}

impl<T: SheetEnum> PartialEq<T> for Label<T> {
    fn eq(&self, other: &T) -> bool {
        matches!(self, Label::Known(v) if v == other)
    }
}

impl<T: SheetEnum> fmt::Display for Label<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date cell: the stored text plus its best-effort parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateCell {
    raw: String,
    date: Option<NaiveDate>,
}

impl DateCell {
    pub fn from_cell(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            date: parse_date_loose(raw),
        }
    }

    /// Parsed date, `None` for blank or unreadable cells.
    pub fn get(&self) -> Option<NaiveDate> {
        self.date
    }

    /// The persisted text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

impl From<Option<NaiveDate>> for DateCell {
    fn from(date: Option<NaiveDate>) -> Self {
        Self {
            raw: format_opt_date(date),
            date,
        }
    }
}

impl From<NaiveDate> for DateCell {
    fn from(date: NaiveDate) -> Self {
        Some(date).into()
    }
}

impl PartialEq<Option<NaiveDate>> for DateCell {
    fn eq(&self, other: &Option<NaiveDate>) -> bool {
        self.date == *other
    }
}
