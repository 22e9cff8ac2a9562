use super::cell::SheetEnum;
use crate::errors::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ContactStatus {
    #[default]
    NotContacted,
    Contacted,
    Replied,
    Ongoing,
    Closed,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 5] = [
        ContactStatus::NotContacted,
        ContactStatus::Contacted,
        ContactStatus::Replied,
        ContactStatus::Ongoing,
        ContactStatus::Closed,
    ];

    /// Convert enum → sheet string
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::NotContacted => "Not Contacted",
            ContactStatus::Contacted => "Contacted",
            ContactStatus::Replied => "Replied",
            ContactStatus::Ongoing => "Ongoing",
            ContactStatus::Closed => "Closed",
        }
    }

    /// Convert sheet string → enum (exact match)
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }

    /// Helper: parse user input, case-insensitive
    pub fn parse(s: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ScholarshipStatus {
    #[default]
    ToExplore,
    Applied,
    Shortlisted,
    Accepted,
    Rejected,
}

impl ScholarshipStatus {
    pub const ALL: [ScholarshipStatus; 5] = [
        ScholarshipStatus::ToExplore,
        ScholarshipStatus::Applied,
        ScholarshipStatus::Shortlisted,
        ScholarshipStatus::Accepted,
        ScholarshipStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScholarshipStatus::ToExplore => "To Explore",
            ScholarshipStatus::Applied => "Applied",
            ScholarshipStatus::Shortlisted => "Shortlisted",
            ScholarshipStatus::Accepted => "Accepted",
            ScholarshipStatus::Rejected => "Rejected",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    OnHold,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::OnHold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::OnHold => "On Hold",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum MessageType {
    #[default]
    EmailOutgoing,
    EmailIncoming,
    Call,
    Meeting,
    Other,
}

impl MessageType {
    pub const ALL: [MessageType; 5] = [
        MessageType::EmailOutgoing,
        MessageType::EmailIncoming,
        MessageType::Call,
        MessageType::Meeting,
        MessageType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::EmailOutgoing => "Email (Outgoing)",
            MessageType::EmailIncoming => "Email (Incoming)",
            MessageType::Call => "Call",
            MessageType::Meeting => "Meeting",
            MessageType::Other => "Other",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }

    /// Accepts the sheet spelling plus the short aliases
    /// `Email-Outgoing` / `Email-Incoming` (any case).
    pub fn parse(s: &str) -> AppResult<Self> {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "email (outgoing)" | "email-outgoing" | "outgoing" => Ok(MessageType::EmailOutgoing),
            "email (incoming)" | "email-incoming" | "incoming" => Ok(MessageType::EmailIncoming),
            "call" => Ok(MessageType::Call),
            "meeting" => Ok(MessageType::Meeting),
            "other" => Ok(MessageType::Other),
            _ => Err(AppError::InvalidMessageType(s.to_string())),
        }
    }
}

impl SheetEnum for ContactStatus {
    fn label(self) -> &'static str {
        self.as_str()
    }

    fn from_label(s: &str) -> Option<Self> {
        Self::from_db_str(s)
    }
}

impl SheetEnum for ScholarshipStatus {
    fn label(self) -> &'static str {
        self.as_str()
    }

    fn from_label(s: &str) -> Option<Self> {
        Self::from_db_str(s)
    }
}

impl SheetEnum for TaskStatus {
    fn label(self) -> &'static str {
        self.as_str()
    }

    fn from_label(s: &str) -> Option<Self> {
        Self::from_db_str(s)
    }
}

impl SheetEnum for MessageType {
    fn label(self) -> &'static str {
        self.as_str()
    }

    fn from_label(s: &str) -> Option<Self> {
        Self::from_db_str(s)
    }
}
