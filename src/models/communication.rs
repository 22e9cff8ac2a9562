use super::cell::{DateCell, Label};
use super::status::MessageType;
use crate::store::schema::COL_TIMESTAMP;
use crate::store::{Record, Row, Table, coerce_id};

pub const COL_DATE: &str = "Date";
pub const COL_PROFESSOR: &str = "Professor";
pub const COL_MESSAGE_TYPE: &str = "Message Type";
pub const COL_SUMMARY: &str = "Summary";
pub const COL_NEXT_ACTION: &str = "Next Action";
pub const COL_FOLLOW_UP: &str = "Follow-up Date";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommunicationEntry {
    pub id: i64,
    pub created_at: String,
    pub date: DateCell,
    /// Free-text reference to `Professor Name`, not an enforced key.
    pub professor: String,
    pub message_type: Label<MessageType>,
    pub summary: String,
    pub next_action: String,
    pub follow_up: DateCell,
}

impl CommunicationEntry {
    pub fn trimmed(mut self) -> Self {
        for field in [&mut self.professor, &mut self.summary, &mut self.next_action] {
            *field = field.trim().to_string();
        }
        self
    }

    /// Whether this entry is a reply received from the professor. Any stored
    /// type mentioning "Incoming" counts, hand-typed spellings included.
    pub fn is_incoming(&self) -> bool {
        self.message_type.as_str().contains("Incoming")
    }
}

impl Record for CommunicationEntry {
    const TABLE: Table = Table::Communication;

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
            .with(COL_PROFESSOR, self.professor.as_str())
            .with(COL_MESSAGE_TYPE, self.message_type.as_str())
            .with(COL_SUMMARY, self.summary.as_str())
            .with(COL_NEXT_ACTION, self.next_action.as_str())
            .with(COL_FOLLOW_UP, self.follow_up.as_str())
    }

    fn from_row(row: &Row) -> Self {
        Self {
            id: coerce_id(row.get("ID")),
            created_at: row.get(COL_TIMESTAMP).to_string(),
            date: DateCell::from_cell(row.get(COL_DATE)),
            professor: row.get(COL_PROFESSOR).to_string(),
            message_type: Label::from_cell(row.get(COL_MESSAGE_TYPE)),
            summary: row.get(COL_SUMMARY).to_string(),
            next_action: row.get(COL_NEXT_ACTION).to_string(),
            follow_up: DateCell::from_cell(row.get(COL_FOLLOW_UP)),
        }
    }
}
