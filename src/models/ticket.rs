use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    #[serde(alias = "open", alias = "OPEN")]
    Open,
    #[serde(alias = "pending", alias = "PENDING")]
    Pending,
    #[serde(alias = "resolved", alias = "RESOLVED")]
    Resolved,
    #[serde(alias = "closed", alias = "CLOSED")]
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::Pending => "Pending",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }
}

/// One helpdesk ticket as seen by an agent for a coverage day.
///
/// `picked_by_tech` is scoped to the agent set that produced the event: in a
/// single agent's payload it means "this agent handled it"; after merging it
/// means "some selected agent handled it", and `owner_*` names that agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketEvent {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub first_assigned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: Option<String>,
    pub subject: String,
    /// 1 (low) to 4 (urgent); other values are kept and shown as "P?".
    pub priority: i32,
    pub status: TicketStatus,
    #[serde(default)]
    pub assigned_tech_id: Option<String>,
    #[serde(default)]
    pub picked_by_tech: bool,

    // filled in by the merger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_accent: Option<String>,
}

impl TicketEvent {
    pub fn has_valid_priority(&self) -> bool {
        (1..=4).contains(&self.priority)
    }

    pub fn category_str(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}
