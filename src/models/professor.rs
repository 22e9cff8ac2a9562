use super::cell::{DateCell, Label};
use super::status::ContactStatus;
use crate::store::schema::COL_TIMESTAMP;
use crate::store::{Record, Row, Table, coerce_id};

pub const COL_UNIVERSITY: &str = "University";
pub const COL_COUNTRY: &str = "Country";
pub const COL_NAME: &str = "Professor Name";
pub const COL_DEPARTMENT: &str = "Department";
pub const COL_INTERESTS: &str = "Research Interests";
pub const COL_EMAIL: &str = "Email";
pub const COL_WEBSITE: &str = "Website";
pub const COL_STATUS: &str = "Contact Status";
pub const COL_RESPONSE_DATE: &str = "Response Date";
pub const COL_NOTES: &str = "Notes";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Professor {
    pub id: i64,
    pub created_at: String, // ⇔ Timestamp (YYYY-MM-DD HH:MM:SS)
    pub university: String,
    pub country: String,
    pub name: String,
    pub department: String,
    pub research_interests: String,
    pub email: String,
    pub website: String,
    pub status: Label<ContactStatus>,
    pub response_date: DateCell,
    pub notes: String,
}

impl Professor {
    /// Same record with surrounding whitespace removed from free-text fields.
    pub fn trimmed(mut self) -> Self {
        for field in [
            &mut self.university,
            &mut self.country,
            &mut self.name,
            &mut self.department,
            &mut self.research_interests,
            &mut self.email,
            &mut self.website,
            &mut self.notes,
        ] {
            *field = field.trim().to_string();
        }
        self
    }
}

impl Record for Professor {
    const TABLE: Table = Table::Professors;

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
            .with(COL_UNIVERSITY, self.university.as_str())
            .with(COL_COUNTRY, self.country.as_str())
            .with(COL_NAME, self.name.as_str())
            .with(COL_DEPARTMENT, self.department.as_str())
            .with(COL_INTERESTS, self.research_interests.as_str())
            .with(COL_EMAIL, self.email.as_str())
            .with(COL_WEBSITE, self.website.as_str())
            .with(COL_STATUS, self.status.as_str())
            .with(COL_RESPONSE_DATE, self.response_date.as_str())
            .with(COL_NOTES, self.notes.as_str())
    }

    fn from_row(row: &Row) -> Self {
        Self {
            id: coerce_id(row.get("ID")),
            created_at: row.get(COL_TIMESTAMP).to_string(),
            university: row.get(COL_UNIVERSITY).to_string(),
            country: row.get(COL_COUNTRY).to_string(),
            name: row.get(COL_NAME).to_string(),
            department: row.get(COL_DEPARTMENT).to_string(),
            research_interests: row.get(COL_INTERESTS).to_string(),
            email: row.get(COL_EMAIL).to_string(),
            website: row.get(COL_WEBSITE).to_string(),
            status: Label::from_cell(row.get(COL_STATUS)),
            response_date: DateCell::from_cell(row.get(COL_RESPONSE_DATE)),
            notes: row.get(COL_NOTES).to_string(),
        }
    }
}
