//! Communication log and the professor auto-reply update.
//!
//! Logging an incoming message for a professor marks that professor as
//! `Replied`. The link is by exact name only: when the name is unknown or
//! shared by several professors nothing is written.

use crate::context::RequestContext;
use crate::core::filter::CommunicationFilter;
use crate::errors::AppResult;
use crate::models::professor::{COL_NAME, COL_RESPONSE_DATE, COL_STATUS};
use crate::models::{CommunicationEntry, ContactStatus, MessageType};
use crate::store::{Row, SheetStore, Table};
use chrono::NaiveDate;

/// Result of looking a professor up by name.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfessorMatch {
    None,
    One(Row),
    Many(usize),
}

/// What the auto-reply side effect did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoReply {
    /// Not an incoming message, or no professor given.
    NotApplicable,
    Updated { id: i64 },
    NotFound,
    Ambiguous { count: usize },
}

/// Exact, case-sensitive lookup on `Professor Name`.
pub fn find_professor(rows: &[Row], name: &str) -> ProfessorMatch {
    let mut hits = rows.iter().filter(|r| r.get(COL_NAME) == name);
    match (hits.next(), hits.next()) {
        (None, _) => ProfessorMatch::None,
        (Some(row), None) => ProfessorMatch::One(row.clone()),
        (Some(_), Some(_)) => ProfessorMatch::Many(2 + hits.count()),
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommunicationPatch {
    pub date: Option<Option<NaiveDate>>,
    pub professor: Option<String>,
    pub message_type: Option<MessageType>,
    pub summary: Option<String>,
    pub next_action: Option<String>,
    pub follow_up: Option<Option<NaiveDate>>,
}

impl CommunicationPatch {
    pub fn apply_to(self, c: &mut CommunicationEntry) {
        if let Some(v) = self.date {
            c.date = v.into();
        }
        if let Some(v) = self.professor {
            c.professor = v.trim().to_string();
        }
        if let Some(v) = self.message_type {
            c.message_type = v.into();
        }
        if let Some(v) = self.summary {
            c.summary = v.trim().to_string();
        }
        if let Some(v) = self.next_action {
            c.next_action = v.trim().to_string();
        }
        if let Some(v) = self.follow_up {
            c.follow_up = v.into();
        }
    }
}

pub struct CommunicationLogic;

impl CommunicationLogic {
    /// Append a communication entry, then run the auto-reply update.
    pub fn log(
        store: &mut SheetStore,
        ctx: &RequestContext,
        entry: CommunicationEntry,
    ) -> AppResult<(CommunicationEntry, AutoReply)> {
        let mut entry = entry.trimmed();
        entry.created_at = ctx.timestamp();

        let entry = store.insert(entry)?;
        let outcome = Self::apply_auto_reply(store, &entry)?;

        Ok((entry, outcome))
    }

    /// Mark the referenced professor as `Replied` when `entry` is an incoming
    /// message and the name resolves to exactly one professor.
    pub fn apply_auto_reply(
        store: &mut SheetStore,
        entry: &CommunicationEntry,
    ) -> AppResult<AutoReply> {
        if !entry.is_incoming() || entry.professor.is_empty() {
            return Ok(AutoReply::NotApplicable);
        }

        let rows = store.list(Table::Professors)?;
        let mut row = match find_professor(&rows, &entry.professor) {
            ProfessorMatch::None => {
                tracing::debug!(professor = %entry.professor, "auto-reply: no such professor");
                return Ok(AutoReply::NotFound);
            }
            ProfessorMatch::Many(count) => {
                tracing::debug!(professor = %entry.professor, count, "auto-reply: ambiguous name");
                return Ok(AutoReply::Ambiguous { count });
            }
            ProfessorMatch::One(row) => row,
        };

        let Some(id) = row.id() else {
            return Ok(AutoReply::NotFound);
        };

        row.set(COL_STATUS, ContactStatus::Replied.as_str());
        row.set(COL_RESPONSE_DATE, entry.date.as_str());

        if store.update_by_id(Table::Professors, id, &row)? {
            Ok(AutoReply::Updated { id })
        } else {
            Ok(AutoReply::NotFound)
        }
    }

    pub fn list(
        store: &mut SheetStore,
        filter: &CommunicationFilter,
    ) -> AppResult<Vec<CommunicationEntry>> {
        Ok(filter.apply(store.list_records()?))
    }

    /// Edit an entry in place. The auto-reply update only runs on `log`.
    pub fn update(
        store: &mut SheetStore,
        id: i64,
        patch: CommunicationPatch,
    ) -> AppResult<Option<CommunicationEntry>> {
        let Some(mut c) = store.find_by_id::<CommunicationEntry>(id)? else {
            return Ok(None);
        };
        patch.apply_to(&mut c);

        if store.update_record(&c)? {
            Ok(Some(c))
        } else {
            Ok(None)
        }
    }

    pub fn delete(store: &mut SheetStore, id: i64) -> AppResult<bool> {
        store.delete::<CommunicationEntry>(id)
    }
}
