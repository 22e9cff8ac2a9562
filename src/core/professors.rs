use crate::context::RequestContext;
use crate::core::filter::ProfessorFilter;
use crate::errors::AppResult;
use crate::models::{ContactStatus, Professor};
use crate::store::SheetStore;
use chrono::NaiveDate;

/// Fields to change on an existing professor; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProfessorPatch {
    pub university: Option<String>,
    pub country: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub research_interests: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub status: Option<ContactStatus>,
    /// `Some(None)` clears the response date.
    pub response_date: Option<Option<NaiveDate>>,
    pub notes: Option<String>,
}

impl ProfessorPatch {
    pub fn apply_to(self, p: &mut Professor) {
        if let Some(v) = self.university {
            p.university = v.trim().to_string();
        }
        if let Some(v) = self.country {
            p.country = v.trim().to_string();
        }
        if let Some(v) = self.name {
            p.name = v.trim().to_string();
        }
        if let Some(v) = self.department {
            p.department = v.trim().to_string();
        }
        if let Some(v) = self.research_interests {
            p.research_interests = v.trim().to_string();
        }
        if let Some(v) = self.email {
            p.email = v.trim().to_string();
        }
        if let Some(v) = self.website {
            p.website = v.trim().to_string();
        }
        if let Some(v) = self.status {
            p.status = v.into();
        }
        if let Some(v) = self.response_date {
            p.response_date = v.into();
        }
        if let Some(v) = self.notes {
            p.notes = v.trim().to_string();
        }
    }
}

/// High-level logic of the professor tracker.
pub struct ProfessorLogic;

impl ProfessorLogic {
    /// Store a new professor, stamping ID and creation time.
    pub fn add(store: &mut SheetStore, ctx: &RequestContext, p: Professor) -> AppResult<Professor> {
        let mut p = p.trimmed();
        p.created_at = ctx.timestamp();
        store.insert(p)
    }

    pub fn list(store: &mut SheetStore, filter: &ProfessorFilter) -> AppResult<Vec<Professor>> {
        Ok(filter.apply(store.list_records()?))
    }

    /// Apply `patch` to professor `id`. Returns `None` when the ID is unknown.
    pub fn update(
        store: &mut SheetStore,
        id: i64,
        patch: ProfessorPatch,
    ) -> AppResult<Option<Professor>> {
        let Some(mut p) = store.find_by_id::<Professor>(id)? else {
            return Ok(None);
        };
        patch.apply_to(&mut p);

        if store.update_record(&p)? {
            Ok(Some(p))
        } else {
            Ok(None)
        }
    }

    pub fn delete(store: &mut SheetStore, id: i64) -> AppResult<bool> {
        store.delete::<Professor>(id)
    }
}
