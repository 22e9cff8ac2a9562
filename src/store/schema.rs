//! Fixed worksheet layout of the planner.

use crate::errors::{AppError, AppResult};
use clap::ValueEnum;

pub const COL_ID: &str = "ID";
pub const COL_TIMESTAMP: &str = "Timestamp";

const PROFESSOR_COLUMNS: &[&str] = &[
    "ID",
    "Timestamp",
    "University",
    "Country",
    "Professor Name",
    "Department",
    "Research Interests",
    "Email",
    "Website",
    "Contact Status",
    "Response Date",
    "Notes",
];

const SCHOLARSHIP_COLUMNS: &[&str] = &[
    "ID",
    "Timestamp",
    "Scholarship Name",
    "Country",
    "Deadline",
    "Eligibility",
    "Funding Amount",
    "Link",
    "Status",
    "Notes",
];

const COMMUNICATION_COLUMNS: &[&str] = &[
    "ID",
    "Timestamp",
    "Date",
    "Professor",
    "Message Type",
    "Summary",
    "Next Action",
    "Follow-up Date",
];

const TIMELINE_COLUMNS: &[&str] = &["ID", "Timestamp", "Date", "Task", "Status", "Notes"];

/// The four worksheets of a planner workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Table {
    Professors,
    Scholarships,
    Communication,
    Timeline,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::Professors,
        Table::Scholarships,
        Table::Communication,
        Table::Timeline,
    ];

    /// Worksheet title as persisted in the workbook.
    pub fn title(&self) -> &'static str {
        match self {
            Table::Professors => "Professors",
            Table::Scholarships => "Scholarships",
            Table::Communication => "Communication",
            Table::Timeline => "Timeline",
        }
    }

    /// Ordered header of the worksheet.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::Professors => PROFESSOR_COLUMNS,
            Table::Scholarships => SCHOLARSHIP_COLUMNS,
            Table::Communication => COMMUNICATION_COLUMNS,
            Table::Timeline => TIMELINE_COLUMNS,
        }
    }

    pub fn header(&self) -> Vec<String> {
        self.columns().iter().map(|c| c.to_string()).collect()
    }

    pub fn from_title(s: &str) -> AppResult<Self> {
        Table::ALL
            .into_iter()
            .find(|t| t.title().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidTable(s.to_string()))
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
