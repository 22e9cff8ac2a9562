//! Typed records, one per planner worksheet.

pub mod cell;
pub mod communication;
pub mod professor;
pub mod scholarship;
pub mod status;
pub mod timeline;

pub use cell::{DateCell, Label, SheetEnum};
pub use communication::CommunicationEntry;
pub use professor::Professor;
pub use scholarship::Scholarship;
pub use status::{ContactStatus, MessageType, ScholarshipStatus, TaskStatus};
pub use timeline::TimelineTask;
