use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HelpdeskError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    Pending,
    Accepted,
    Resolved,
    Rejected,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Pending => write!(f, "pending"),
            TicketStatus::Accepted => write!(f, "accepted"),
            TicketStatus::Resolved => write!(f, "resolved"),
            TicketStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TicketStatus::Pending),
            "accepted" => Ok(TicketStatus::Accepted),
            "resolved" => Ok(TicketStatus::Resolved),
            "rejected" => Ok(TicketStatus::Rejected),
            _ => Err(HelpdeskError::InvalidStatus(s.to_string())),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["pending", "accepted", "resolved", "rejected"];

/// All statuses in board-column order.
pub const ALL_STATUSES: [TicketStatus; 4] = [
    TicketStatus::Pending,
    TicketStatus::Accepted,
    TicketStatus::Resolved,
    TicketStatus::Rejected,
];

/// Fields the store accepts in `sortBy`. Anything else is silently ignored
/// by the server, so parsing returns `None` rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    CreatedAt,
    #[default]
    UpdatedAt,
    Status,
    Title,
}

impl SortField {
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s {
            "created_at" => Some(SortField::CreatedAt),
            "updated_at" => Some(SortField::UpdatedAt),
            "status" => Some(SortField::Status),
            "title" => Some(SortField::Title),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
            SortField::Status => "status",
            SortField::Title => "title",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[default]
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrder {
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ASC" => Some(SortOrder::Asc),
            "DESC" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A support ticket as the store returns it.
///
/// `id`, `created_at` and `updated_at` are assigned server-side; `status`
/// starts as `pending` and only changes through update calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub contact_information: String,
    pub status: TicketStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
