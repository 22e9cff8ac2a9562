//! Headline numbers of the planner.

use crate::context::RequestContext;
use crate::core::filter::{sort_by_date, within_days};
use crate::errors::AppResult;
use crate::models::{ContactStatus, Professor, Scholarship};
use crate::store::SheetStore;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// At most this many scholarships are listed as upcoming.
pub const UPCOMING_LIMIT: usize = 20;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub total_professors: usize,
    pub contacted: usize,
    pub replied: usize,
    pub total_scholarships: usize,
    /// Scholarships whose deadline is within the window (overdue included).
    pub deadlines_soon: usize,
    /// Dated scholarships, earliest deadline first.
    pub upcoming: Vec<Scholarship>,
    /// Professor count per (country, contact status).
    pub by_country_status: BTreeMap<(String, String), usize>,
}

impl DashboardSummary {
    pub fn build(
        professors: &[Professor],
        scholarships: &[Scholarship],
        today: NaiveDate,
        window_days: i64,
    ) -> Self {
        let count_status = |status: ContactStatus| {
            professors.iter().filter(|p| p.status == status).count()
        };

        let deadlines_soon = scholarships
            .iter()
            .filter(|s| within_days(s.deadline.get(), today, window_days))
            .count();

        let mut upcoming: Vec<Scholarship> = scholarships
            .iter()
            .filter(|s| s.deadline.get().is_some())
            .cloned()
            .collect();
        sort_by_date(&mut upcoming, |s| s.deadline.get());
        upcoming.truncate(UPCOMING_LIMIT);

        let mut by_country_status = BTreeMap::new();
        for p in professors {
            *by_country_status
                .entry((p.country.clone(), p.status.as_str().to_string()))
                .or_insert(0) += 1;
        }

        Self {
            total_professors: professors.len(),
            contacted: count_status(ContactStatus::Contacted),
            replied: count_status(ContactStatus::Replied),
            total_scholarships: scholarships.len(),
            deadlines_soon,
            upcoming,
            by_country_status,
        }
    }
}

pub struct DashboardLogic;

impl DashboardLogic {
    pub fn summary(store: &mut SheetStore, ctx: &RequestContext) -> AppResult<DashboardSummary> {
        let professors: Vec<Professor> = store.list_records()?;
        let scholarships: Vec<Scholarship> = store.list_records()?;

        Ok(DashboardSummary::build(
            &professors,
            &scholarships,
            ctx.today(),
            ctx.deadline_window_days(),
        ))
    }
}
