//! Projects tickets from several days onto one time-of-day axis.

use super::markers::Boundaries;
use super::timezone;
use crate::models::{AgentShift, Marker, MarkerKind, TicketEvent, TimelineItem};
use chrono::{DateTime, Duration, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;

fn hour_marker(hour: u32, ticket_at: DateTime<Utc>, reference_tz: Tz) -> Marker {
    let local = ticket_at.with_timezone(&reference_tz);
    let into_hour = Duration::minutes(i64::from(local.minute()))
        + Duration::seconds(i64::from(local.second()))
        + Duration::nanoseconds(i64::from(local.nanosecond()));

    Marker::new(
        format!("{hour:02}:00"),
        MarkerKind::HourBoundary,
        ticket_at - into_hour,
    )
}

/// Sort `tickets` by their time of day in `reference_tz`, ignoring the date,
/// and interleave hour boundaries plus the once-only agent/HQ boundaries.
///
/// `shifts` and `hq_at` are resolved for a single representative date; only
/// their time of day is compared against tickets.
pub fn project_combined(
    tickets: &[TicketEvent],
    shifts: &[AgentShift],
    hq_at: DateTime<Utc>,
    reference_tz: Tz,
) -> Vec<TimelineItem> {
    let mut projected: Vec<(NaiveTime, &TicketEvent)> = tickets
        .iter()
        .map(|t| (timezone::local_time_of_day(t.created_at, reference_tz), t))
        .collect();
    projected.sort_by_key(|(tod, t)| (*tod, t.created_at, t.id));

    let mut boundaries = Boundaries::new(shifts, hq_at, reference_tz);
    let mut out = Vec::with_capacity(projected.len() * 2 + shifts.len() * 2 + 1);
    let mut prev_hour: Option<u32> = None;

    for (tod, ticket) in projected {
        let hour = tod.hour();
        if prev_hour != Some(hour) {
            out.push(TimelineItem::Marker(hour_marker(
                hour,
                ticket.created_at,
                reference_tz,
            )));
            prev_hour = Some(hour);
        }

        let fired = boundaries.fire(|m| tod >= timezone::local_time_of_day(m.at, reference_tz));
        out.extend(fired.into_iter().map(TimelineItem::Marker));
        out.push(TimelineItem::Ticket(ticket.clone()));
    }

    out.extend(boundaries.remaining().into_iter().map(TimelineItem::Marker));
    out
}
