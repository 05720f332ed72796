//! Interleaves boundary markers into one day's ticket list.
//!
//! Every agent contributes an online and an offline marker, the day
//! contributes a single "HQ online" marker at the coverage cutoff. A marker
//! is emitted right before the first ticket at or past its instant; markers
//! no ticket reaches are appended at the end.

use super::timezone;
use crate::models::{AgentShift, Marker, MarkerKind, TicketEvent, TimelineItem};
use crate::utils::{date, time};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

pub fn agent_online_marker(shift: &AgentShift) -> Marker {
    Marker {
        label: format!(
            "{} online ({} {})",
            shift.first_name, shift.display_city, shift.local_start
        ),
        kind: MarkerKind::AgentOnline,
        at: shift.start,
        agent_id: Some(shift.agent_id.clone()),
        accent: shift.accent.clone(),
    }
}

pub fn agent_offline_marker(shift: &AgentShift) -> Marker {
    Marker {
        label: format!(
            "{} offline ({} {})",
            shift.first_name, shift.display_city, shift.local_end
        ),
        kind: MarkerKind::AgentOffline,
        at: shift.end,
        agent_id: Some(shift.agent_id.clone()),
        accent: shift.accent.clone(),
    }
}

pub fn hq_online_marker(at: DateTime<Utc>, reference_tz: Tz) -> Marker {
    Marker::new(
        format!(
            "HQ online ({} {})",
            time::clock_in_zone(at, reference_tz),
            time::zone_abbreviation(at, reference_tz)
        ),
        MarkerKind::HqOnline,
        at,
    )
}

/// Marker for the start of `day` in the reference zone.
pub fn date_change_marker(day: NaiveDate, reference_tz: Tz, fallback: DateTime<Utc>) -> Marker {
    let at = reference_tz
        .from_local_datetime(&day.and_time(NaiveTime::MIN))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(fallback);

    Marker::new(
        format!("{} {}", date::weekday_short(day), date::format_date(day)),
        MarkerKind::DateChange,
        at,
    )
}

/// Pending once-per-build boundaries (agent on/off, HQ online).
///
/// Lives for a single day build; nothing is shared between builds.
#[derive(Debug)]
pub struct Boundaries {
    pending: Vec<(Marker, bool)>,
}

impl Boundaries {
    pub fn new(shifts: &[AgentShift], hq_at: DateTime<Utc>, reference_tz: Tz) -> Self {
        let mut pending = Vec::with_capacity(shifts.len() * 2 + 1);
        pending.extend(shifts.iter().map(|s| (agent_online_marker(s), false)));
        pending.push((hq_online_marker(hq_at, reference_tz), false));
        pending.extend(shifts.iter().map(|s| (agent_offline_marker(s), false)));
        Self { pending }
    }

    /// Mark every not-yet-emitted boundary accepted by `crossed` as emitted
    /// and return those markers in emission order.
    pub fn fire(&mut self, mut crossed: impl FnMut(&Marker) -> bool) -> Vec<Marker> {
        let mut fired: Vec<Marker> = self
            .pending
            .iter_mut()
            .filter(|(m, done)| !*done && crossed(m))
            .map(|(m, done)| {
                *done = true;
                m.clone()
            })
            .collect();

        fired.sort_by_key(|m| (m.kind.rank(), m.at));
        fired
    }

    /// Boundaries no ticket reached, by reference instant.
    pub fn remaining(self) -> Vec<Marker> {
        let mut rest: Vec<Marker> = self
            .pending
            .into_iter()
            .filter(|(_, done)| !done)
            .map(|(m, _)| m)
            .collect();

        rest.sort_by_key(|m| (m.at, m.kind.rank()));
        rest
    }
}

/// Build one day's interleaved list. `tickets` must be sorted by creation
/// time; date changes are detected in `reference_tz`.
pub fn insert_markers(
    tickets: &[TicketEvent],
    shifts: &[AgentShift],
    hq_at: DateTime<Utc>,
    reference_tz: Tz,
) -> Vec<TimelineItem> {
    let mut boundaries = Boundaries::new(shifts, hq_at, reference_tz);
    let mut out = Vec::with_capacity(tickets.len() + shifts.len() * 2 + 2);
    let mut prev_date: Option<NaiveDate> = None;

    for ticket in tickets {
        let local_date = timezone::local_date(ticket.created_at, reference_tz);
        if let Some(prev) = prev_date
            && prev != local_date
        {
            out.push(TimelineItem::Marker(date_change_marker(
                local_date,
                reference_tz,
                ticket.created_at,
            )));
        }
        prev_date = Some(local_date);

        let fired = boundaries.fire(|m| ticket.created_at >= m.at);
        out.extend(fired.into_iter().map(TimelineItem::Marker));
        out.push(TimelineItem::Ticket(ticket.clone()));
    }

    out.extend(boundaries.remaining().into_iter().map(TimelineItem::Marker));
    out
}
