use super::cell::{DateCell, Label};
use super::status::ScholarshipStatus;
use crate::store::schema::COL_TIMESTAMP;
use crate::store::{Record, Row, Table, coerce_id};

pub const COL_NAME: &str = "Scholarship Name";
pub const COL_COUNTRY: &str = "Country";
pub const COL_DEADLINE: &str = "Deadline";
pub const COL_ELIGIBILITY: &str = "Eligibility";
pub const COL_FUNDING: &str = "Funding Amount";
pub const COL_LINK: &str = "Link";
pub const COL_STATUS: &str = "Status";
pub const COL_NOTES: &str = "Notes";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scholarship {
    pub id: i64,
    pub created_at: String,
    pub name: String,
    pub country: String, // country or region
    pub deadline: DateCell,
    pub eligibility: String,
    pub funding: String, // amount / duration, free text
    pub link: String,
    pub status: Label<ScholarshipStatus>,
    pub notes: String,
}

impl Scholarship {
    pub fn trimmed(mut self) -> Self {
        for field in [
            &mut self.name,
            &mut self.country,
            &mut self.eligibility,
            &mut self.funding,
            &mut self.link,
            &mut self.notes,
        ] {
            *field = field.trim().to_string();
        }
        self
    }
}

impl Record for Scholarship {
    const TABLE: Table = Table::Scholarships;

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
            .with(COL_NAME, self.name.as_str())
            .with(COL_COUNTRY, self.country.as_str())
            .with(COL_DEADLINE, self.deadline.as_str())
            .with(COL_ELIGIBILITY, self.eligibility.as_str())
            .with(COL_FUNDING, self.funding.as_str())
            .with(COL_LINK, self.link.as_str())
            .with(COL_STATUS, self.status.as_str())
            .with(COL_NOTES, self.notes.as_str())
    }

    fn from_row(row: &Row) -> Self {
        Self {
            id: coerce_id(row.get("ID")),
            created_at: row.get(COL_TIMESTAMP).to_string(),
            name: row.get(COL_NAME).to_string(),
            country: row.get(COL_COUNTRY).to_string(),
            deadline: DateCell::from_cell(row.get(COL_DEADLINE)),
            eligibility: row.get(COL_ELIGIBILITY).to_string(),
            funding: row.get(COL_FUNDING).to_string(),
            link: row.get(COL_LINK).to_string(),
            status: Label::from_cell(row.get(COL_STATUS)),
            notes: row.get(COL_NOTES).to_string(),
        }
    }
}
