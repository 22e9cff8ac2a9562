//! Planner operations, one `XxxLogic` per area.

pub mod backup;
pub mod check;
pub mod communication;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod log;
pub mod professors;
pub mod scholarships;
pub mod timeline;

pub use check::{CheckLogic, CheckReport, SheetState};
pub use communication::{AutoReply, CommunicationLogic, ProfessorMatch, find_professor};
pub use dashboard::{DashboardLogic, DashboardSummary};
pub use professors::ProfessorLogic;
pub use scholarships::ScholarshipLogic;
pub use timeline::TimelineLogic;
