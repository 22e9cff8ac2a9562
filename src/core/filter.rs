//! Pure filters behind the browse views.
//!
//! Nothing here touches the store: every function works on rows or records
//! already loaded in memory.

use crate::models::{CommunicationEntry, Professor, Scholarship, TimelineTask};
use crate::store::Row;
use chrono::NaiveDate;

/// Sentinel meaning "no status filter".
pub const ALL: &str = "All";

/// Case-insensitive substring match. An empty needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when any of `fields` contains `needle` (case-insensitive).
pub fn matches_any_ci(fields: &[&str], needle: &str) -> bool {
    needle.is_empty() || fields.iter().any(|f| contains_ci(f, needle))
}

/// Exact, case-sensitive match on the stored text of an enumerated field,
/// or no filter at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    /// `None` and the `All` sentinel both disable the filter.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None => StatusFilter::All,
            Some(v) if v == ALL => StatusFilter::All,
            Some(v) => StatusFilter::Only(v.to_string()),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => expected == value,
        }
    }
}

/// Rows whose `column` passes `filter`, in their original order.
pub fn filter_rows<'a>(rows: &'a [Row], column: &str, filter: &StatusFilter) -> Vec<&'a Row> {
    rows.iter().filter(|r| filter.matches(r.get(column))).collect()
}

/// Deadline proximity: `target - today <= days`. Past dates pass; a missing
/// date never does.
pub fn within_days(target: Option<NaiveDate>, today: NaiveDate, days: i64) -> bool {
    match target {
        Some(d) => (d - today).num_days() <= days,
        None => false,
    }
}

/// Stable ascending sort by date; items without a date go last.
pub fn sort_by_date<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> Option<NaiveDate>,
{
    items.sort_by(|a, b| match (key(a), key(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

/// Browse filters of the professor tracker.
#[derive(Debug, Clone, Default)]
pub struct ProfessorFilter {
    pub country: String,
    pub status: StatusFilter,
    /// Matched against name, university and research interests.
    pub search: String,
}

impl ProfessorFilter {
    pub fn matches(&self, p: &Professor) -> bool {
        contains_ci(&p.country, &self.country)
            && self.status.matches(p.status.as_str())
            && matches_any_ci(
                &[
                    p.name.as_str(),
                    p.university.as_str(),
                    p.research_interests.as_str(),
                ],
                &self.search,
            )
    }

    pub fn apply(&self, items: Vec<Professor>) -> Vec<Professor> {
        items.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// Browse filters of the scholarship tracker.
#[derive(Debug, Clone, Default)]
pub struct ScholarshipFilter {
    pub country: String,
    pub status: StatusFilter,
    /// Keep only deadlines at most this many days ahead (overdue included).
    pub due_within: Option<i64>,
}

impl ScholarshipFilter {
    pub fn matches(&self, s: &Scholarship, today: NaiveDate) -> bool {
        contains_ci(&s.country, &self.country)
            && self.status.matches(s.status.as_str())
            && self
                .due_within
                .is_none_or(|days| within_days(s.deadline.get(), today, days))
    }

    pub fn apply(&self, items: Vec<Scholarship>, today: NaiveDate) -> Vec<Scholarship> {
        items
            .into_iter()
            .filter(|s| self.matches(s, today))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommunicationFilter {
    pub professor: String,
    pub message_type: StatusFilter,
}

impl CommunicationFilter {
    pub fn matches(&self, c: &CommunicationEntry) -> bool {
        contains_ci(&c.professor, &self.professor) && self.message_type.matches(c.message_type.as_str())
    }

    pub fn apply(&self, items: Vec<CommunicationEntry>) -> Vec<CommunicationEntry> {
        items.into_iter().filter(|c| self.matches(c)).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimelineFilter {
    pub status: StatusFilter,
}

impl TimelineFilter {
    /// Matching tasks ordered by date, undated tasks last.
    pub fn apply(&self, items: Vec<TimelineTask>) -> Vec<TimelineTask> {
        let mut out: Vec<TimelineTask> = items
            .into_iter()
            .filter(|t| self.status.matches(t.status.as_str()))
            .collect();
        sort_by_date(&mut out, |t| t.date.get());
        out
    }
}
