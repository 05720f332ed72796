use super::ticket::TicketEvent;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One calendar date of ticket activity.
///
/// `window_end` is the extended-coverage cutoff; it also drives the
/// "HQ online" marker. Tickets after the cutoff arrive in `extended`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageDay {
    pub date: NaiveDate,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    #[serde(default)]
    pub coverage: Vec<TicketEvent>,
    #[serde(default)]
    pub extended: Vec<TicketEvent>,
}

impl CoverageDay {
    pub fn ticket_count(&self) -> usize {
        self.coverage.len() + self.extended.len()
    }

    pub fn all_tickets(&self) -> impl Iterator<Item = &TicketEvent> {
        self.coverage.iter().chain(self.extended.iter())
    }

    /// Coverage and extended tickets as one list ordered by (created_at, id).
    pub fn sorted_tickets(&self) -> Vec<TicketEvent> {
        let mut out: Vec<TicketEvent> = self.all_tickets().cloned().collect();
        out.sort_by_key(|t| (t.created_at, t.id));
        out
    }
}

/// A coverage day after filtering: only the visible tickets, already sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredDay {
    pub date: NaiveDate,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub tickets: Vec<TicketEvent>,
    pub hidden: usize,
}

impl FilteredDay {
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn picked_count(&self) -> usize {
        self.tickets.iter().filter(|t| t.picked_by_tech).count()
    }

    pub fn not_picked_count(&self) -> usize {
        self.tickets.len() - self.picked_count()
    }
}
