use crate::context::RequestContext;
use crate::core::filter::ScholarshipFilter;
use crate::errors::AppResult;
use crate::models::{Scholarship, ScholarshipStatus};
use crate::store::SheetStore;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct ScholarshipPatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub deadline: Option<Option<NaiveDate>>,
    pub eligibility: Option<String>,
    pub funding: Option<String>,
    pub link: Option<String>,
    pub status: Option<ScholarshipStatus>,
    pub notes: Option<String>,
}

impl ScholarshipPatch {
    pub fn apply_to(self, s: &mut Scholarship) {
        if let Some(v) = self.name {
            s.name = v.trim().to_string();
        }
        if let Some(v) = self.country {
            s.country = v.trim().to_string();
        }
        if let Some(v) = self.deadline {
            s.deadline = v.into();
        }
        if let Some(v) = self.eligibility {
            s.eligibility = v.trim().to_string();
        }
        if let Some(v) = self.funding {
            s.funding = v.trim().to_string();
        }
        if let Some(v) = self.link {
            s.link = v.trim().to_string();
        }
        if let Some(v) = self.status {
            s.status = v.into();
        }
        if let Some(v) = self.notes {
            s.notes = v.trim().to_string();
        }
    }
}

pub struct ScholarshipLogic;

impl ScholarshipLogic {
    pub fn add(
        store: &mut SheetStore,
        ctx: &RequestContext,
        s: Scholarship,
    ) -> AppResult<Scholarship> {
        let mut s = s.trimmed();
        s.created_at = ctx.timestamp();
        store.insert(s)
    }

    /// Filtered scholarships; proximity is measured from the context's today.
    pub fn list(
        store: &mut SheetStore,
        ctx: &RequestContext,
        filter: &ScholarshipFilter,
    ) -> AppResult<Vec<Scholarship>> {
        Ok(filter.apply(store.list_records()?, ctx.today()))
    }

    pub fn update(
        store: &mut SheetStore,
        id: i64,
        patch: ScholarshipPatch,
    ) -> AppResult<Option<Scholarship>> {
        let Some(mut s) = store.find_by_id::<Scholarship>(id)? else {
            return Ok(None);
        };
        patch.apply_to(&mut s);

        if store.update_record(&s)? {
            Ok(Some(s))
        } else {
            Ok(None)
        }
    }

    pub fn delete(store: &mut SheetStore, id: i64) -> AppResult<bool> {
        store.delete::<Scholarship>(id)
    }
}
