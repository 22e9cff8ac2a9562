use crate::context::RequestContext;
use crate::core::filter::TimelineFilter;
use crate::errors::AppResult;
use crate::models::{TaskStatus, TimelineTask};
use crate::store::SheetStore;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub date: Option<Option<NaiveDate>>,
    pub task: Option<String>,
    pub status: Option<TaskStatus>,
    pub notes: Option<String>,
}

impl TaskPatch {
    pub fn apply_to(self, t: &mut TimelineTask) {
        if let Some(v) = self.date {
            t.date = v.into();
        }
        if let Some(v) = self.task {
            t.task = v.trim().to_string();
        }
        if let Some(v) = self.status {
            t.status = v.into();
        }
        if let Some(v) = self.notes {
            t.notes = v.trim().to_string();
        }
    }
}

pub struct TimelineLogic;

impl TimelineLogic {
    pub fn add(
        store: &mut SheetStore,
        ctx: &RequestContext,
        t: TimelineTask,
    ) -> AppResult<TimelineTask> {
        let mut t = t.trimmed();
        t.created_at = ctx.timestamp();
        store.insert(t)
    }

    /// Tasks matching `filter`, ordered by date (undated last).
    pub fn list(store: &mut SheetStore, filter: &TimelineFilter) -> AppResult<Vec<TimelineTask>> {
        Ok(filter.apply(store.list_records()?))
    }

    pub fn update(
        store: &mut SheetStore,
        id: i64,
        patch: TaskPatch,
    ) -> AppResult<Option<TimelineTask>> {
        let Some(mut t) = store.find_by_id::<TimelineTask>(id)? else {
            return Ok(None);
        };
        patch.apply_to(&mut t);

        if store.update_record(&t)? {
            Ok(Some(t))
        } else {
            Ok(None)
        }
    }

    pub fn delete(store: &mut SheetStore, id: i64) -> AppResult<bool> {
        store.delete::<TimelineTask>(id)
    }
}
