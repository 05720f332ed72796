use super::ticket::TicketEvent;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    DateChange,
    HourBoundary,
    AgentOnline,
    HqOnline,
    AgentOffline,
}

impl MarkerKind {
    /// Order of markers triggered by the same ticket.
    pub fn rank(&self) -> u8 {
        match self {
            MarkerKind::DateChange | MarkerKind::HourBoundary => 0,
            MarkerKind::AgentOnline => 1,
            MarkerKind::HqOnline => 2,
            MarkerKind::AgentOffline => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerKind::DateChange => "date_change",
            MarkerKind::HourBoundary => "hour_boundary",
            MarkerKind::AgentOnline => "agent_online",
            MarkerKind::HqOnline => "hq_online",
            MarkerKind::AgentOffline => "agent_offline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub label: String,
    #[serde(rename = "marker_kind")]
    pub kind: MarkerKind,
    /// UTC reference instant of the boundary this marker stands for.
    pub at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl Marker {
    pub fn new(label: impl Into<String>, kind: MarkerKind, at: DateTime<Utc>) -> Self {
        Self {
            label: label.into(),
            kind,
            at,
            agent_id: None,
            accent: None,
        }
    }
}

/// One render-ready row of a timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineItem {
    Ticket(TicketEvent),
    Marker(Marker),
    DayHeader {
        date: NaiveDate,
        picked_count: usize,
        not_picked_count: usize,
        total: usize,
    },
    EmptyGap {
        start_date: NaiveDate,
        end_date: NaiveDate,
        count: usize,
    },
    MergedMarkerGroup {
        markers: Vec<Marker>,
    },
}

impl TimelineItem {
    pub fn is_marker(&self) -> bool {
        matches!(self, TimelineItem::Marker(_))
    }

    pub fn as_ticket(&self) -> Option<&TicketEvent> {
        match self {
            TimelineItem::Ticket(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_marker(&self) -> Option<&Marker> {
        match self {
            TimelineItem::Marker(m) => Some(m),
            _ => None,
        }
    }

    /// Markers carried by this item, whether single or grouped.
    pub fn markers(&self) -> &[Marker] {
        match self {
            TimelineItem::Marker(m) => std::slice::from_ref(m),
            TimelineItem::MergedMarkerGroup { markers } => markers,
            _ => &[],
        }
    }
}
