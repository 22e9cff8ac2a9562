use super::cell::{DateCell, Label};
use super::status::TaskStatus;
use crate::store::schema::COL_TIMESTAMP;
use crate::store::{Record, Row, Table, coerce_id};

pub const COL_DATE: &str = "Date";
pub const COL_TASK: &str = "Task";
pub const COL_STATUS: &str = "Status";
pub const COL_NOTES: &str = "Notes";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineTask {
    pub id: i64,
    pub created_at: String,
    pub date: DateCell,
    pub task: String,
    pub status: Label<TaskStatus>,
    pub notes: String,
}

impl TimelineTask {
    pub fn trimmed(mut self) -> Self {
        self.task = self.task.trim().to_string();
        self.notes = self.notes.trim().to_string();
        self
    }
}

impl Record for TimelineTask {
    const TABLE: Table = Table::Timeline;

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn to_row(&self) -> Row {
        Row::new()
            .with("ID", self.id.to_string())
            .with(COL_TIMESTAMP, self.created_at.as_str())
            .with(COL_DATE, self.date.as_str())
            .with(COL_TASK, self.task.as_str())
            .with(COL_STATUS, self.status.as_str())
            .with(COL_NOTES, self.notes.as_str())
    }

    fn from_row(row: &Row) -> Self {
        Self {
            id: coerce_id(row.get("ID")),
            created_at: row.get(COL_TIMESTAMP).to_string(),
            date: DateCell::from_cell(row.get(COL_DATE)),
            task: row.get(COL_TASK).to_string(),
            status: Label::from_cell(row.get(COL_STATUS)),
            notes: row.get(COL_NOTES).to_string(),
        }
    }
}
